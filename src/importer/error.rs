// ==========================================
// Warehouse Packer - ошибки импорта
// ==========================================
// Инструмент: thiserror
// ==========================================

use crate::error::PackError;
use thiserror::Error;

/// Ошибки импорта листов
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== Файл =====
    #[error("Файл не найден: {0}")]
    FileNotFound(String),

    #[error("Формат файла не поддерживается: {0} (ожидается .xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("Не удалось прочитать файл: {0}")]
    FileRead(String),

    #[error("Ошибка разбора Excel: {0}")]
    ExcelParse(String),

    #[error("Ошибка разбора CSV: {0}")]
    CsvParse(String),

    // ===== Структура листа =====
    #[error("В листе нет колонок: {0}")]
    MissingColumns(String),

    #[error("Ошибка значения (строка {row}, колонка «{column}»): {message}")]
    TypeConversion {
        row: usize,
        column: String,
        message: String,
    },
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileRead(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParse(err.to_string())
    }
}

impl From<calamine::XlsxError> for ImportError {
    fn from(err: calamine::XlsxError) -> Self {
        ImportError::ExcelParse(err.to_string())
    }
}

// Сбои файла остаются вводом-выводом, всё остальное
// считается некорректной формой данных
impl From<ImportError> for PackError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::FileNotFound(_) | ImportError::FileRead(_) => {
                PackError::Io(err.to_string())
            }
            other => PackError::Validation(other.to_string()),
        }
    }
}

/// Псевдоним Result
pub type ImportResult<T> = Result<T, ImportError>;
