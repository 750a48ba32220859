// ==========================================
// Warehouse Packer - разбор файлов листов
// ==========================================
// Поддержка: Excel (.xlsx/.xls) / CSV (.csv)
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook, Reader, Xlsx};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// Разобранный лист: заголовки в исходном порядке колонок
/// и строки-словари. Значения приведены к строкам и обрезаны.
#[derive(Debug, Clone)]
pub struct ParsedSheet {
    pub headers: Vec<String>,
    pub rows: Vec<HashMap<String, String>>,
}

impl ParsedSheet {
    /// Заголовок по позиции (для листов без значимых имён колонок)
    pub fn header_at(&self, idx: usize) -> Option<&str> {
        self.headers.get(idx).map(|h| h.as_str())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Универсальный парсер: реализация выбирается по расширению файла
pub struct SheetParser;

impl SheetParser {
    pub fn parse<P: AsRef<Path>>(path: P) -> ImportResult<ParsedSheet> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => Self::parse_csv(path),
            "xlsx" | "xls" => Self::parse_excel(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }

    pub fn parse_csv(path: &Path) -> ImportResult<ParsedSheet> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // строки разной длины допустимы
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row.insert(header.clone(), value.trim().to_string());
                }
            }

            // Полностью пустые строки пропускаются
            if row.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row);
        }

        Ok(ParsedSheet { headers, rows })
    }

    pub fn parse_excel(path: &Path) -> ImportResult<ParsedSheet> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let mut workbook: Xlsx<_> = open_workbook(path)?;

        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ImportError::ExcelParse("в книге нет листов".to_string()));
        }

        // Читается первый лист книги
        let sheet_name = sheet_names[0].clone();
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParse(e.to_string()))?;

        let mut excel_rows = range.rows();
        let header_row = excel_rows
            .next()
            .ok_or_else(|| ImportError::ExcelParse("лист не содержит строк".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for data_row in excel_rows {
            let mut row = HashMap::new();

            for (col_idx, cell) in data_row.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row.insert(header.clone(), cell.to_string().trim().to_string());
                }
            }

            if row.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row);
        }

        Ok(ParsedSheet { headers, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_csv_valid_file() {
        let mut temp_file = NamedTempFile::with_suffix(".csv").unwrap();
        writeln!(temp_file, "Артикул,Количество").unwrap();
        writeln!(temp_file, "ART-001,5").unwrap();
        writeln!(temp_file, "ART-002,3").unwrap();

        let sheet = SheetParser::parse_csv(temp_file.path()).unwrap();

        assert_eq!(sheet.headers, vec!["Артикул", "Количество"]);
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.rows[0].get("Артикул"), Some(&"ART-001".to_string()));
        assert_eq!(sheet.rows[0].get("Количество"), Some(&"5".to_string()));
    }

    #[test]
    fn test_parse_csv_file_not_found() {
        let result = SheetParser::parse_csv(Path::new("нет_такого.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_parse_csv_skips_blank_rows() {
        let mut temp_file = NamedTempFile::with_suffix(".csv").unwrap();
        writeln!(temp_file, "Артикул,Количество").unwrap();
        writeln!(temp_file, "ART-001,5").unwrap();
        writeln!(temp_file, ",").unwrap();
        writeln!(temp_file, "ART-002,3").unwrap();

        let sheet = SheetParser::parse_csv(temp_file.path()).unwrap();

        assert_eq!(sheet.len(), 2);
    }

    #[test]
    fn test_parse_unsupported_extension() {
        let result = SheetParser::parse(Path::new("данные.txt"));
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }
}
