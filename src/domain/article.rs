// ==========================================
// Warehouse Packer - каталог артикулов
// ==========================================
// Каталог действует в рамках одной сессии и заменяется
// целиком при каждом импорте листа заказа.
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Позиция листа заказа: артикул и требуемое количество
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub article_id: String,
    pub required_qty: u32,
}

/// Каталог текущей сессии: артикул -> требуемое количество.
/// Обход идёт по возрастанию артикула.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleCatalog {
    items: BTreeMap<String, u32>,
}

impl ArticleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Каталог из позиций листа; при повторе артикула действует последняя строка
    pub fn from_rows(rows: impl IntoIterator<Item = Article>) -> Self {
        let items = rows
            .into_iter()
            .map(|row| (row.article_id, row.required_qty))
            .collect();
        Self { items }
    }

    /// Требуемое количество по артикулу
    pub fn required_qty(&self, article_id: &str) -> Option<u32> {
        self.items.get(article_id).copied()
    }

    pub fn contains(&self, article_id: &str) -> bool {
        self.items.contains_key(article_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Пары (артикул, требуемое количество) по возрастанию артикула
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(id, qty)| (id.as_str(), *qty))
    }

    /// Артикулы по возрастанию
    pub fn article_ids(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(|id| id.as_str())
    }
}
