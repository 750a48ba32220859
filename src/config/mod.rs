// ==========================================
// Warehouse Packer - настройки подключения к складу
// ==========================================
// JSON в профиле пользователя; перечитывается при запуске,
// перезаписывается целиком при каждом подключении/отключении.
// ==========================================

use crate::error::{PackError, PackResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Имя листа склада по умолчанию
pub const DEFAULT_SHEET_NAME: &str = "Склад";

const CONFIG_FILE_NAME: &str = ".warehouse_storage_config.json";

/// Настройки подключения к внешнему складу
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Идентификатор удалённой таблицы
    pub remote_id: Option<String>,
    /// Имя листа склада
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
    /// Включена ли синхронизация
    #[serde(default)]
    pub enabled: bool,
}

fn default_sheet_name() -> String {
    DEFAULT_SHEET_NAME.to_string()
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            remote_id: None,
            sheet_name: default_sheet_name(),
            enabled: false,
        }
    }
}

impl LedgerConfig {
    /// Путь файла настроек по умолчанию
    /// (домашний каталог пользователя)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Чтение настроек. Отсутствующий или повреждённый файл
    /// даёт настройки по умолчанию.
    pub fn load(path: &Path) -> Self {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => return Self::default(),
        };

        match serde_json::from_str(&raw) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "настройки склада повреждены, используются значения по умолчанию"
                );
                Self::default()
            }
        }
    }

    /// Запись настроек целиком
    pub fn save(&self, path: &Path) -> PackResult<()> {
        let raw = serde_json::to_string_pretty(self).map_err(|e| PackError::Io(e.to_string()))?;
        fs::write(path, raw)?;
        Ok(())
    }
}
