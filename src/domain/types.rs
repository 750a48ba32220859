// ==========================================
// Warehouse Packer - доменные перечисления
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Схема выгрузки (Export Schema)
// ==========================================
// Две поддерживаемые площадки; различаются набором полей,
// переносимых из шаблона отгрузки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExportSchema {
    Wb,   // Wildberries
    Ozon, // Ozon
}

impl fmt::Display for ExportSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportSchema::Wb => write!(f, "WB"),
            ExportSchema::Ozon => write!(f, "OZON"),
        }
    }
}

// ==========================================
// Состояние подключения к складу (Sync State)
// ==========================================
// Переходы: Disabled -> Connecting -> Connected -> Disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SyncState {
    Disabled,   // Синхронизация отключена
    Connecting, // Идёт подключение
    Connected,  // Подключено, операции активны
}

impl fmt::Display for SyncState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncState::Disabled => write!(f, "DISABLED"),
            SyncState::Connecting => write!(f, "CONNECTING"),
            SyncState::Connected => write!(f, "CONNECTED"),
        }
    }
}
