// ==========================================
// Warehouse Packer - сопоставление GTIN
// ==========================================
// Сопоставление переживает сессии через кэш в профиле
// пользователя и заменяется целиком при каждом импорте.
// ==========================================

mod cache;

pub use cache::default_cache_path;

use crate::error::{PackError, PackResult};
use crate::importer::GtinRow;
use std::collections::HashMap;
use std::path::Path;

/// Сопоставление «штрихкод -> артикул» с обратным индексом
/// для выгрузок.
#[derive(Debug, Clone, Default)]
pub struct GtinMapping {
    /// Пары в порядке импорта; порядок закрепляет обратный индекс
    entries: Vec<(String, String)>,
    /// Штрихкод -> артикул; при дублях штрихкода действует последняя пара
    by_barcode: HashMap<String, String>,
    /// Артикул -> штрихкод; за артикулом закрепляется первый
    /// импортированный штрихкод
    by_article: HashMap<String, String>,
}

impl GtinMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Замена сопоставления целиком, без записи кэша
    pub fn replace(&mut self, rows: Vec<GtinRow>) {
        self.entries = rows
            .into_iter()
            .map(|row| (row.barcode, row.article_id))
            .collect();
        self.rebuild_indexes();
    }

    /// Замена сопоставления с записью в кэш профиля;
    /// возвращает число пар
    pub fn load(&mut self, rows: Vec<GtinRow>, cache_path: &Path) -> PackResult<usize> {
        self.replace(rows);
        cache::save(cache_path, &self.entries)?;
        tracing::info!(pairs = self.entries.len(), "таблица GTIN заменена и сохранена");
        Ok(self.entries.len())
    }

    /// Чтение кэша профиля. Нечитаемый или незнакомый кэш
    /// означает отсутствие сопоставления, а не ошибку запуска.
    pub fn load_cached(cache_path: &Path) -> Self {
        let mut mapping = Self {
            entries: cache::load(cache_path),
            ..Self::default()
        };
        mapping.rebuild_indexes();
        mapping
    }

    fn rebuild_indexes(&mut self) {
        self.by_barcode.clear();
        self.by_article.clear();
        for (barcode, article_id) in &self.entries {
            self.by_barcode.insert(barcode.clone(), article_id.clone());
            self.by_article
                .entry(article_id.clone())
                .or_insert_with(|| barcode.clone());
        }
    }

    /// Точный поиск артикула по штрихкоду
    pub fn resolve(&self, barcode: &str) -> PackResult<&str> {
        self.by_barcode
            .get(barcode)
            .map(|article| article.as_str())
            .ok_or_else(|| PackError::not_found("GTIN", barcode))
    }

    /// Обратный поиск штрихкода по артикулу.
    ///
    /// Обратное соответствие не уникально: если на артикул заведено
    /// несколько штрихкодов, возвращается первый из импортированных.
    pub fn reverse(&self, article_id: &str) -> Option<&str> {
        self.by_article.get(article_id).map(|b| b.as_str())
    }

    /// Штрихкод для выгрузки: при отсутствии сопоставления
    /// возвращается сам артикул
    pub fn barcode_or_article<'a>(&'a self, article_id: &'a str) -> &'a str {
        self.reverse(article_id).unwrap_or(article_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(pairs: &[(&str, &str)]) -> Vec<GtinRow> {
        pairs
            .iter()
            .map(|(barcode, article)| GtinRow {
                barcode: barcode.to_string(),
                article_id: article.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_resolve_exact_match_only() {
        let mut mapping = GtinMapping::new();
        mapping.replace(rows(&[("4600000000017", "ART-1")]));

        assert_eq!(mapping.resolve("4600000000017").unwrap(), "ART-1");
        assert!(matches!(
            mapping.resolve("4600000000016"),
            Err(PackError::NotFound { .. })
        ));
    }

    #[test]
    fn test_duplicate_barcode_last_wins_forward() {
        let mut mapping = GtinMapping::new();
        mapping.replace(rows(&[("GT1", "ART-1"), ("GT1", "ART-2")]));

        assert_eq!(mapping.resolve("GT1").unwrap(), "ART-2");
    }

    #[test]
    fn test_reverse_first_inserted_wins() {
        let mut mapping = GtinMapping::new();
        mapping.replace(rows(&[("GT1", "ART-1"), ("GT2", "ART-1")]));

        assert_eq!(mapping.reverse("ART-1"), Some("GT1"));
    }

    #[test]
    fn test_barcode_fallback_to_article() {
        let mapping = GtinMapping::new();
        assert_eq!(mapping.barcode_or_article("ART-9"), "ART-9");
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut mapping = GtinMapping::new();
        mapping.replace(rows(&[("GT1", "ART-1")]));
        mapping.replace(rows(&[("GT2", "ART-2")]));

        assert!(mapping.resolve("GT1").is_err());
        assert_eq!(mapping.resolve("GT2").unwrap(), "ART-2");
    }
}
