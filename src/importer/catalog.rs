// ==========================================
// Warehouse Packer - импорт листа заказа
// ==========================================
// Две признанные формы листа: именованная пара колонок
// «Артикул»/«Количество» (без учёта регистра) либо первые
// две колонки листа.
// ==========================================

use crate::domain::article::Article;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::ParsedSheet;

/// Локализованные имена колонок листа заказа
pub const CATALOG_ARTICLE_HEADER: &str = "Артикул";
pub const CATALOG_QTY_HEADER: &str = "Количество";

/// Заголовки пустого шаблона листа заказа («Скачать шаблон»)
pub fn catalog_template() -> [&'static str; 2] {
    [CATALOG_ARTICLE_HEADER, CATALOG_QTY_HEADER]
}

/// Извлекает позиции заказа из разобранного листа.
///
/// Сначала ищется именованная пара колонок; если её нет,
/// берутся первые две колонки листа как артикул и количество.
pub fn catalog_rows(sheet: &ParsedSheet) -> ImportResult<Vec<Article>> {
    let named = (
        find_header(sheet, CATALOG_ARTICLE_HEADER),
        find_header(sheet, CATALOG_QTY_HEADER),
    );

    let (article_col, qty_col) = match named {
        (Some(article), Some(qty)) => (article, qty),
        _ => {
            // Позиционный запасной вариант
            if sheet.headers.len() < 2 {
                return Err(ImportError::MissingColumns(format!(
                    "«{CATALOG_ARTICLE_HEADER}» и «{CATALOG_QTY_HEADER}»"
                )));
            }
            (sheet.headers[0].clone(), sheet.headers[1].clone())
        }
    };

    let mut out = Vec::with_capacity(sheet.rows.len());
    for (idx, row) in sheet.rows.iter().enumerate() {
        // Нумерация строк листа: строка 1 занята заголовками
        let sheet_row = idx + 2;

        let article = row.get(&article_col).cloned().unwrap_or_default();
        let raw_qty = row.get(&qty_col).cloned().unwrap_or_default();
        if article.is_empty() && raw_qty.is_empty() {
            continue;
        }
        if article.is_empty() {
            return Err(ImportError::TypeConversion {
                row: sheet_row,
                column: article_col.clone(),
                message: "пустой артикул".to_string(),
            });
        }

        let qty = parse_qty(&raw_qty).map_err(|message| ImportError::TypeConversion {
            row: sheet_row,
            column: qty_col.clone(),
            message,
        })?;

        out.push(Article {
            article_id: article,
            required_qty: qty,
        });
    }

    Ok(out)
}

/// Именованная колонка без учёта регистра
fn find_header(sheet: &ParsedSheet, name: &str) -> Option<String> {
    let needle = name.to_lowercase();
    sheet
        .headers
        .iter()
        .find(|h| h.to_lowercase() == needle)
        .cloned()
}

/// Количество: целое неотрицательное; Excel может отдать его
/// вещественным («5.0»)
fn parse_qty(raw: &str) -> Result<u32, String> {
    if let Ok(qty) = raw.parse::<u32>() {
        return Ok(qty);
    }
    if let Ok(float_qty) = raw.parse::<f64>() {
        if float_qty.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&float_qty) {
            return Ok(float_qty as u32);
        }
    }
    Err(format!("«{raw}» не является целым неотрицательным количеством"))
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
    fn test_named_headers_case_insensitive() {
        let sheet = sheet(
            &["АРТИКУЛ", "количество", "Комментарий"],
            &[&[("АРТИКУЛ", "ART-1"), ("количество", "4"), ("Комментарий", "x")]],
        );

        let rows = catalog_rows(&sheet).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].article_id, "ART-1");
        assert_eq!(rows[0].required_qty, 4);
    }

    #[test]
    fn test_positional_fallback() {
        let sheet = sheet(
            &["Код", "Штук"],
            &[&[("Код", "ART-1"), ("Штук", "2")], &[("Код", "ART-2"), ("Штук", "7")]],
        );

        let rows = catalog_rows(&sheet).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].article_id, "ART-2");
        assert_eq!(rows[1].required_qty, 7);
    }

    #[test]
    fn test_single_column_sheet_rejected() {
        let sheet = sheet(&["Код"], &[&[("Код", "ART-1")]]);
        let result = catalog_rows(&sheet);
        assert!(matches!(result, Err(ImportError::MissingColumns(_))));
    }

    #[test]
    fn test_bad_quantity_reports_sheet_row() {
        let sheet = sheet(
            &["Артикул", "Количество"],
            &[
                &[("Артикул", "ART-1"), ("Количество", "1")],
                &[("Артикул", "ART-2"), ("Количество", "много")],
            ],
        );

        match catalog_rows(&sheet) {
            Err(ImportError::TypeConversion { row, column, .. }) => {
                assert_eq!(row, 3);
                assert_eq!(column, "Количество");
            }
            other => panic!("ожидалась TypeConversion, получено {other:?}"),
        }
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let sheet = sheet(
            &["Артикул", "Количество"],
            &[&[("Артикул", "ART-1"), ("Количество", "-2")]],
        );
        assert!(catalog_rows(&sheet).is_err());
    }

    #[test]
    fn test_excel_float_quantity_accepted() {
        let sheet = sheet(
            &["Артикул", "Количество"],
            &[&[("Артикул", "ART-1"), ("Количество", "5.0")]],
        );

        let rows = catalog_rows(&sheet).unwrap();
        assert_eq!(rows[0].required_qty, 5);
    }
}
