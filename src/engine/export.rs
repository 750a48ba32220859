// ==========================================
// Warehouse Packer - движок выгрузок
// ==========================================
// Плоская выгрузка содержимого коробов и обогащение по шаблону
// площадки. Строки шаблона сопоставляются коробам позиционно,
// в порядке создания коробов; более короткая последовательность
// ограничивает обход.
// ==========================================

use crate::domain::types::ExportSchema;
use crate::error::{PackError, PackResult};
use crate::gtin::GtinMapping;
use crate::importer::ParsedSheet;
use crate::session::PackingSession;
use serde::Serialize;
use std::collections::HashMap;

// ===== Колонки шаблона WB =====
pub const WB_BOX_BARCODE: &str = "ШК короба";
pub const WB_EXPIRY: &str = "Срок годности";

// ===== Колонки шаблона Ozon =====
pub const OZON_ITEM_BARCODE: &str = "ШК товара";
pub const OZON_ARTICLE: &str = "Артикул товара";
pub const OZON_QTY: &str = "Кол-во товаров";
pub const OZON_ZONE: &str = "Зона размещения";
pub const OZON_UNIT_BARCODE: &str = "ШК ГМ";
pub const OZON_UNIT_TYPE: &str = "Тип ГМ (не обязательно)";
pub const OZON_EXPIRY: &str =
    "Срок годности ДО в формате YYYY-MM-DD (не более 1 СГ на 1 SKU в 1 ГМ)";

/// Строка плоской выгрузки: пара (короб, артикул)
/// с положительным количеством
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackedRow {
    pub article_id: String,
    pub quantity: u32,
    pub box_name: String,
}

/// Строка отгрузки WB
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WbShipmentRow {
    pub item_barcode: String,
    pub quantity: u32,
    pub box_barcode: String,
    pub expiry_date: String,
}

/// Строка отгрузки Ozon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OzonShipmentRow {
    pub item_barcode: String,
    pub article_id: String,
    pub quantity: u32,
    pub placement_zone: String,
    pub storage_unit_barcode: String,
    pub storage_unit_type: String,
    pub expiry_date: String,
}

/// Результат обогащения по схеме площадки
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShipmentRows {
    Wb(Vec<WbShipmentRow>),
    Ozon(Vec<OzonShipmentRow>),
}

/// Движок выгрузок
pub struct ExportEngine;

impl ExportEngine {
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // Плоская выгрузка
    // ==========================================

    /// По строке на каждую пару (короб, артикул) с положительным
    /// количеством. Порядок: короба в порядке создания, артикулы
    /// по возрастанию.
    pub fn flatten_all(&self, session: &PackingSession) -> PackResult<Vec<PackedRow>> {
        let mut rows = Vec::new();
        for pack_box in session.boxes().iter() {
            for (article_id, quantity) in pack_box.iter() {
                if quantity > 0 {
                    rows.push(PackedRow {
                        article_id: article_id.to_string(),
                        quantity,
                        box_name: pack_box.name.clone(),
                    });
                }
            }
        }

        if rows.is_empty() {
            return Err(PackError::EmptyResult);
        }
        Ok(rows)
    }

    // ==========================================
    // Обогащение по шаблону площадки
    // ==========================================

    /// Обязательные колонки шаблона для схемы
    pub fn required_template_columns(schema: ExportSchema) -> &'static [&'static str] {
        match schema {
            ExportSchema::Wb => &[WB_BOX_BARCODE, WB_EXPIRY],
            ExportSchema::Ozon => &[
                OZON_ITEM_BARCODE,
                OZON_ARTICLE,
                OZON_QTY,
                OZON_ZONE,
                OZON_UNIT_BARCODE,
                OZON_UNIT_TYPE,
                OZON_EXPIRY,
            ],
        }
    }

    /// Проверка заголовков шаблона. Все отсутствующие колонки
    /// перечисляются одним сообщением.
    pub fn validate_template(&self, schema: ExportSchema, template: &ParsedSheet) -> PackResult<()> {
        let missing: Vec<&str> = Self::required_template_columns(schema)
            .iter()
            .copied()
            .filter(|column| !template.headers.iter().any(|h| h == column))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(PackError::Validation(format!(
                "шаблон {schema} должен содержать колонки: {}",
                missing.join(", ")
            )))
        }
    }

    /// Обогащение по выбранной схеме площадки
    pub fn enrich_by_template(
        &self,
        session: &PackingSession,
        mapping: &GtinMapping,
        template: &ParsedSheet,
        schema: ExportSchema,
    ) -> PackResult<ShipmentRows> {
        match schema {
            ExportSchema::Wb => self
                .enrich_wb(session, mapping, template)
                .map(ShipmentRows::Wb),
            ExportSchema::Ozon => self
                .enrich_ozon(session, mapping, template)
                .map(ShipmentRows::Ozon),
        }
    }

    /// Отгрузка WB: штрихкод товара, количество и поля короба
    /// из позиционно сопоставленной строки шаблона
    pub fn enrich_wb(
        &self,
        session: &PackingSession,
        mapping: &GtinMapping,
        template: &ParsedSheet,
    ) -> PackResult<Vec<WbShipmentRow>> {
        if session.boxes().is_empty() {
            return Err(PackError::Precondition("нет коробов для отгрузки".to_string()));
        }
        self.validate_template(ExportSchema::Wb, template)?;
        self.warn_on_count_mismatch(ExportSchema::Wb, session, template);

        let mut rows = Vec::new();
        for (pack_box, tpl_row) in session.boxes().iter().zip(template.rows.iter()) {
            let box_barcode = template_value(tpl_row, WB_BOX_BARCODE);
            let expiry_date = template_value(tpl_row, WB_EXPIRY);

            for (article_id, quantity) in pack_box.iter() {
                if quantity == 0 {
                    continue;
                }
                rows.push(WbShipmentRow {
                    item_barcode: mapping.barcode_or_article(article_id).to_string(),
                    quantity,
                    box_barcode: box_barcode.clone(),
                    expiry_date: expiry_date.clone(),
                });
            }
        }

        if rows.is_empty() {
            return Err(PackError::EmptyResult);
        }
        Ok(rows)
    }

    /// Отгрузка Ozon: штрихкод и количество вычисляются,
    /// остальные поля переносятся из строки шаблона
    pub fn enrich_ozon(
        &self,
        session: &PackingSession,
        mapping: &GtinMapping,
        template: &ParsedSheet,
    ) -> PackResult<Vec<OzonShipmentRow>> {
        if session.boxes().is_empty() {
            return Err(PackError::Precondition("нет коробов для отгрузки".to_string()));
        }
        self.validate_template(ExportSchema::Ozon, template)?;
        self.warn_on_count_mismatch(ExportSchema::Ozon, session, template);

        let mut rows = Vec::new();
        for (pack_box, tpl_row) in session.boxes().iter().zip(template.rows.iter()) {
            let placement_zone = template_value(tpl_row, OZON_ZONE);
            let storage_unit_barcode = template_value(tpl_row, OZON_UNIT_BARCODE);
            let storage_unit_type = template_value(tpl_row, OZON_UNIT_TYPE);
            let expiry_date = template_value(tpl_row, OZON_EXPIRY);

            for (article_id, quantity) in pack_box.iter() {
                if quantity == 0 {
                    continue;
                }
                rows.push(OzonShipmentRow {
                    item_barcode: mapping.barcode_or_article(article_id).to_string(),
                    article_id: article_id.to_string(),
                    quantity,
                    placement_zone: placement_zone.clone(),
                    storage_unit_barcode: storage_unit_barcode.clone(),
                    storage_unit_type: storage_unit_type.clone(),
                    expiry_date: expiry_date.clone(),
                });
            }
        }

        if rows.is_empty() {
            return Err(PackError::EmptyResult);
        }
        Ok(rows)
    }

    fn warn_on_count_mismatch(
        &self,
        schema: ExportSchema,
        session: &PackingSession,
        template: &ParsedSheet,
    ) {
        let boxes = session.boxes().len();
        let template_rows = template.rows.len();
        if boxes != template_rows {
            tracing::warn!(
                %schema,
                boxes,
                template_rows,
                "число строк шаблона не совпадает с числом коробов; лишние останутся без пары"
            );
        }
    }
}

impl Default for ExportEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn template_value(row: &HashMap<String, String>, column: &str) -> String {
    row.get(column).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(headers: &[&str]) -> ParsedSheet {
        ParsedSheet {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    #[test]
    fn test_validate_template_wb_ok() {
        let engine = ExportEngine::new();
        let tpl = template(&[WB_BOX_BARCODE, WB_EXPIRY, "Комментарий"]);
        assert!(engine.validate_template(ExportSchema::Wb, &tpl).is_ok());
    }

    #[test]
    fn test_validate_template_lists_all_missing_columns() {
        let engine = ExportEngine::new();
        let tpl = template(&["Комментарий"]);

        match engine.validate_template(ExportSchema::Wb, &tpl) {
            Err(PackError::Validation(message)) => {
                assert!(message.contains(WB_BOX_BARCODE));
                assert!(message.contains(WB_EXPIRY));
            }
            other => panic!("ожидалась Validation, получено {other:?}"),
        }
    }

    #[test]
    fn test_validate_template_ozon_requires_full_set() {
        let engine = ExportEngine::new();
        let tpl = template(&[OZON_ITEM_BARCODE, OZON_ARTICLE, OZON_QTY]);
        assert!(engine.validate_template(ExportSchema::Ozon, &tpl).is_err());
    }
}
