// ==========================================
// Warehouse Packer - движок распределения
// ==========================================
// Инвариант: упакованное по артикулу суммарно по всем коробам
// никогда не превышает требуемого количеством листа.
// Проверка всегда выполняется до изменения состояния.
// ==========================================

use crate::error::{PackError, PackResult};
use crate::gtin::GtinMapping;
use crate::session::PackingSession;
use tracing::instrument;

/// Движок распределения: скан штрихкода и ручная правка
/// содержимого выбранного короба
pub struct AllocationEngine;

/// Итог успешного скана (для строки состояния на границе UI)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub article_id: String,
    /// Количество артикула в выбранном коробе после скана
    pub in_box: u32,
    /// Осталось распределить по артикулу после скана
    pub remaining: u32,
}

impl AllocationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Обработка скана: +1 к артикулу в выбранном коробе.
    ///
    /// Порядок проверок:
    /// 1) загружен лист, выбран короб, загружена таблица GTIN;
    /// 2) штрихкод известен;
    /// 3) артикул присутствует в листе;
    /// 4) по артикулу есть остаток.
    /// Отказ на любом шаге оставляет состояние нетронутым.
    #[instrument(skip(self, session, mapping), fields(barcode = %barcode))]
    pub fn scan(
        &self,
        session: &mut PackingSession,
        mapping: &GtinMapping,
        barcode: &str,
    ) -> PackResult<ScanResult> {
        let barcode = barcode.trim();

        if session.catalog().is_empty() {
            return Err(PackError::Precondition("сначала загрузите лист".to_string()));
        }
        if session.selected_name().is_none() {
            return Err(PackError::Precondition("не выбран короб".to_string()));
        }
        if mapping.is_empty() {
            return Err(PackError::Precondition(
                "не загружена таблица GTIN".to_string(),
            ));
        }

        let article_id = mapping.resolve(barcode)?.to_string();

        // Расхождение таблицы GTIN и листа заказа
        let required = session.catalog().required_qty(&article_id).ok_or_else(|| {
            PackError::Validation(format!(
                "артикул {article_id} из таблицы GTIN отсутствует в листе"
            ))
        })?;

        let packed = session.total_packed(&article_id);
        if packed >= required {
            return Err(PackError::CapacityExceeded {
                article: article_id,
                required,
                packed,
            });
        }

        let in_box = session.increment_selected(&article_id)?;
        let remaining = required - (packed + 1);

        tracing::debug!(article = %article_id, in_box, remaining, "скан учтён");
        Ok(ScanResult {
            article_id,
            in_box,
            remaining,
        })
    }

    /// Ручная правка: установить точное количество артикула
    /// в выбранном коробе.
    ///
    /// Проверяется суммарный лимит: новое значение плюс упакованное
    /// в остальных коробах не должно превышать требуемого.
    #[instrument(skip(self, session), fields(article = %article_id, new_value))]
    pub fn set_quantity(
        &self,
        session: &mut PackingSession,
        article_id: &str,
        new_value: u32,
    ) -> PackResult<()> {
        if session.catalog().is_empty() {
            return Err(PackError::Precondition("сначала загрузите лист".to_string()));
        }
        let selected = session
            .selected_name()
            .ok_or_else(|| PackError::Precondition("не выбран короб".to_string()))?
            .to_string();

        let required = session.catalog().required_qty(article_id).ok_or_else(|| {
            PackError::Validation(format!("артикул {article_id} отсутствует в листе"))
        })?;

        let current = session
            .boxes()
            .get(&selected)
            .map(|b| b.qty(article_id))
            .unwrap_or(0);
        let other_boxes = session.total_packed(article_id) - current;

        if u64::from(new_value) + u64::from(other_boxes) > u64::from(required) {
            return Err(PackError::CapacityExceeded {
                article: article_id.to_string(),
                required,
                packed: other_boxes,
            });
        }

        session.set_selected_qty(article_id, new_value)?;
        tracing::debug!(article = %article_id, new_value, "количество обновлено вручную");
        Ok(())
    }
}

impl Default for AllocationEngine {
    fn default() -> Self {
        Self::new()
    }
}
