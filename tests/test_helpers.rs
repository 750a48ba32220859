// ==========================================
// Общие помощники интеграционных тестов
// ==========================================
#![allow(dead_code)]

use warehouse_packer::domain::Article;
use warehouse_packer::gtin::GtinMapping;
use warehouse_packer::importer::{GtinRow, ParsedSheet};
use warehouse_packer::session::PackingSession;
use std::collections::HashMap;

/// Сессия с загруженным листом заказа
pub fn session_with_catalog(rows: &[(&str, u32)]) -> PackingSession {
    let mut session = PackingSession::new();
    let rows = rows
        .iter()
        .map(|(article_id, required_qty)| Article {
            article_id: article_id.to_string(),
            required_qty: *required_qty,
        })
        .collect();
    session.load_catalog(rows).expect("загрузка листа");
    session
}

/// Сопоставление GTIN без записи кэша
pub fn mapping_of(pairs: &[(&str, &str)]) -> GtinMapping {
    let mut mapping = GtinMapping::new();
    mapping.replace(
        pairs
            .iter()
            .map(|(barcode, article_id)| GtinRow {
                barcode: barcode.to_string(),
                article_id: article_id.to_string(),
            })
            .collect(),
    );
    mapping
}

/// Лист из заголовков и строк (для шаблонов отгрузки)
pub fn sheet_of(headers: &[&str], rows: &[&[(&str, &str)]]) -> ParsedSheet {
    ParsedSheet {
        headers: headers.iter().map(|h| h.to_string()).collect(),
        rows: rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|(column, value)| (column.to_string(), value.to_string()))
                    .collect::<HashMap<_, _>>()
            })
            .collect(),
    }
}
