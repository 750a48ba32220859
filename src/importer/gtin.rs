// ==========================================
// Warehouse Packer - импорт таблицы GTIN
// ==========================================
// Лист сопоставления: ровно две колонки, позиционно
// штрихкод и артикул, обе читаются как строки.
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::ParsedSheet;

/// Пара «штрихкод -> артикул» из листа сопоставления
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GtinRow {
    pub barcode: String,
    pub article_id: String,
}

/// Извлекает пары сопоставления: первая колонка содержит GTIN,
/// вторая артикул.
pub fn gtin_rows(sheet: &ParsedSheet) -> ImportResult<Vec<GtinRow>> {
    if sheet.headers.len() < 2 {
        return Err(ImportError::MissingColumns(
            "штрихкод и артикул (первые две колонки)".to_string(),
        ));
    }

    let barcode_col = &sheet.headers[0];
    let article_col = &sheet.headers[1];

    let mut out = Vec::with_capacity(sheet.rows.len());
    for (idx, row) in sheet.rows.iter().enumerate() {
        let sheet_row = idx + 2;

        let barcode = row.get(barcode_col).cloned().unwrap_or_default();
        let article_id = row.get(article_col).cloned().unwrap_or_default();

        match (barcode.is_empty(), article_id.is_empty()) {
            (true, true) => continue,
            (false, false) => out.push(GtinRow { barcode, article_id }),
            (true, false) => {
                return Err(ImportError::TypeConversion {
                    row: sheet_row,
                    column: barcode_col.clone(),
                    message: "пустой штрихкод".to_string(),
                })
            }
            (false, true) => {
                return Err(ImportError::TypeConversion {
                    row: sheet_row,
                    column: article_col.clone(),
                    message: "пустой артикул".to_string(),
                })
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn sheet(headers: &[&str], rows: &[&[(&str, &str)]]) -> ParsedSheet {
        ParsedSheet {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect::<HashMap<_, _>>()
                })
                .collect(),
        }
    }

    #[test]
    fn test_two_positional_columns() {
        let sheet = sheet(
            &["GTIN", "Артикул"],
            &[
                &[("GTIN", "4600000000017"), ("Артикул", "ART-1")],
                &[("GTIN", "4600000000024"), ("Артикул", "ART-2")],
            ],
        );

        let rows = gtin_rows(&sheet).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].barcode, "4600000000017");
        assert_eq!(rows[0].article_id, "ART-1");
    }

    #[test]
    fn test_single_column_rejected() {
        let sheet = sheet(&["GTIN"], &[&[("GTIN", "4600000000017")]]);
        assert!(matches!(
            gtin_rows(&sheet),
            Err(ImportError::MissingColumns(_))
        ));
    }

    #[test]
    fn test_half_filled_row_rejected() {
        let sheet = sheet(
            &["GTIN", "Артикул"],
            &[&[("GTIN", "4600000000017"), ("Артикул", "")]],
        );

        match gtin_rows(&sheet) {
            Err(ImportError::TypeConversion { row, .. }) => assert_eq!(row, 2),
            other => panic!("ожидалась TypeConversion, получено {other:?}"),
        }
    }
}
