// ==========================================
// Warehouse Packer - кэш сопоставления GTIN
// ==========================================
// Версионированный JSON в профиле пользователя.
// Повреждённый кэш означает «сопоставление не загружено»,
// а не отказ запуска.
// ==========================================

use crate::error::{PackError, PackResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Текущая версия схемы кэша
const CACHE_FORMAT_VERSION: u32 = 1;

/// Имя файла кэша в домашнем каталоге
const CACHE_FILE_NAME: &str = ".warehouse_packer_gtin.json";

#[derive(Debug, Serialize, Deserialize)]
struct CacheFile {
    format_version: u32,
    entries: Vec<(String, String)>,
}

/// Путь кэша по умолчанию (домашний каталог пользователя)
pub fn default_cache_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CACHE_FILE_NAME)
}

/// Чтение кэша. Любой сбой даёт предупреждение и пустой результат.
pub(super) fn load(path: &Path) -> Vec<(String, String)> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            if path.exists() {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "кэш GTIN не прочитан, сопоставление не загружено"
                );
            }
            return Vec::new();
        }
    };

    match serde_json::from_str::<CacheFile>(&raw) {
        Ok(file) if file.format_version == CACHE_FORMAT_VERSION => file.entries,
        Ok(file) => {
            tracing::warn!(
                path = %path.display(),
                version = file.format_version,
                "незнакомая версия кэша GTIN, сопоставление не загружено"
            );
            Vec::new()
        }
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "кэш GTIN повреждён, сопоставление не загружено"
            );
            Vec::new()
        }
    }
}

/// Запись кэша целиком
pub(super) fn save(path: &Path, entries: &[(String, String)]) -> PackResult<()> {
    let file = CacheFile {
        format_version: CACHE_FORMAT_VERSION,
        entries: entries.to_vec(),
    };
    let raw = serde_json::to_string(&file).map_err(|e| PackError::Io(e.to_string()))?;
    fs::write(path, raw)?;
    Ok(())
}
