// ==========================================
// Warehouse Packer - ошибки синхронизации склада
// ==========================================
// Инструмент: thiserror
// ==========================================

use crate::error::PackError;
use thiserror::Error;

/// Ошибки обмена с внешним складским реестром
#[derive(Error, Debug)]
pub enum LedgerError {
    // ===== Транспорт =====
    #[error("Сбой обмена с внешним складом: {0}")]
    Transport(String),

    // ===== Состояние подключения =====
    #[error("Нет подключения к складу")]
    NotConnected,

    // ===== Конфигурация =====
    #[error("Не задан идентификатор таблицы склада")]
    MissingRemoteId,
}

impl From<reqwest::Error> for LedgerError {
    fn from(err: reqwest::Error) -> Self {
        LedgerError::Transport(err.to_string())
    }
}

// Для вызывающего кода сбой синхронизации выглядит
// как ошибка ввода-вывода
impl From<LedgerError> for PackError {
    fn from(err: LedgerError) -> Self {
        PackError::Io(err.to_string())
    }
}

/// Псевдоним Result
pub type LedgerResult<T> = Result<T, LedgerError>;
