// ==========================================
// Warehouse Packer - ошибки операций
// ==========================================
// Инструмент: thiserror
// Каждое сообщение несёт идентификаторы и количества,
// которые увидит оператор.
// ==========================================

use thiserror::Error;

/// Ошибки операций комплектации
#[derive(Error, Debug)]
pub enum PackError {
    // ===== Форма входных данных =====
    #[error("Некорректные данные: {0}")]
    Validation(String),

    // ===== Нарушение предусловий =====
    #[error("Операция недоступна: {0}")]
    Precondition(String),

    // ===== Промах поиска =====
    #[error("{entity} {id} не найден")]
    NotFound { entity: String, id: String },

    // ===== Лимит по листу заказа =====
    #[error("Превышение по артикулу {article}: доступно {required}, использовано {packed}")]
    CapacityExceeded {
        article: String,
        required: u32,
        packed: u32,
    },

    // ===== Пустой результат =====
    #[error("Нет данных для экспорта")]
    EmptyResult,

    // ===== Ввод-вывод =====
    #[error("Ошибка ввода-вывода: {0}")]
    Io(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PackError {
    pub(crate) fn not_found(entity: &str, id: &str) -> Self {
        PackError::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }
}

impl From<std::io::Error> for PackError {
    fn from(err: std::io::Error) -> Self {
        PackError::Io(err.to_string())
    }
}

/// Псевдоним Result
pub type PackResult<T> = Result<T, PackError>;
