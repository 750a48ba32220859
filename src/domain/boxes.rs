// ==========================================
// Warehouse Packer - короба
// ==========================================
// Порядок создания коробов значим: по нему строки шаблона
// отгрузки выравниваются с коробами при выгрузке.
// ==========================================

use crate::domain::article::ArticleCatalog;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Короб: имя и количество по каждому артикулу.
/// Отсутствующий артикул означает ноль.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackBox {
    pub name: String,
    quantities: BTreeMap<String, u32>,
}

impl PackBox {
    /// Пустой короб с нулевой строкой под каждый артикул каталога
    pub(crate) fn for_catalog(name: &str, catalog: &ArticleCatalog) -> Self {
        let quantities = catalog.article_ids().map(|id| (id.to_string(), 0)).collect();
        Self {
            name: name.to_string(),
            quantities,
        }
    }

    /// Количество артикула в коробе
    pub fn qty(&self, article_id: &str) -> u32 {
        self.quantities.get(article_id).copied().unwrap_or(0)
    }

    pub(crate) fn set_qty(&mut self, article_id: &str, qty: u32) {
        self.quantities.insert(article_id.to_string(), qty);
    }

    pub(crate) fn increment(&mut self, article_id: &str) {
        *self.quantities.entry(article_id.to_string()).or_insert(0) += 1;
    }

    /// Всего штук в коробе
    pub fn total_items(&self) -> u32 {
        self.quantities.values().sum()
    }

    /// Пары (артикул, количество) по возрастанию артикула
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.quantities.iter().map(|(id, qty)| (id.as_str(), *qty))
    }
}

/// Реестр открытых коробов в порядке создания
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoxRegistry {
    boxes: Vec<PackBox>,
}

impl BoxRegistry {
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.boxes.iter().any(|b| b.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&PackBox> {
        self.boxes.iter().find(|b| b.name == name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut PackBox> {
        self.boxes.iter_mut().find(|b| b.name == name)
    }

    pub(crate) fn push(&mut self, pack_box: PackBox) {
        self.boxes.push(pack_box);
    }

    /// Удаление по имени; возвращает удалённый короб
    pub(crate) fn remove(&mut self, name: &str) -> Option<PackBox> {
        let idx = self.boxes.iter().position(|b| b.name == name)?;
        Some(self.boxes.remove(idx))
    }

    /// Переименование с сохранением содержимого и позиции
    pub(crate) fn rename(&mut self, old_name: &str, new_name: &str) -> bool {
        match self.get_mut(old_name) {
            Some(b) => {
                b.name = new_name.to_string();
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.boxes.clear();
    }

    /// Короба в порядке создания
    pub fn iter(&self) -> impl Iterator<Item = &PackBox> {
        self.boxes.iter()
    }

    /// Имена коробов в порядке создания
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.boxes.iter().map(|b| b.name.as_str())
    }

    /// Упаковано по артикулу суммарно по всем коробам
    pub fn total_packed(&self, article_id: &str) -> u32 {
        self.boxes.iter().map(|b| b.qty(article_id)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{Article, ArticleCatalog};

    fn catalog() -> ArticleCatalog {
        ArticleCatalog::from_rows(vec![
            Article {
                article_id: "A1".to_string(),
                required_qty: 10,
            },
            Article {
                article_id: "A2".to_string(),
                required_qty: 5,
            },
        ])
    }

    #[test]
    fn test_for_catalog_zero_filled() {
        let b = PackBox::for_catalog("Короб 1", &catalog());

        assert_eq!(b.qty("A1"), 0);
        assert_eq!(b.qty("A2"), 0);
        assert_eq!(b.total_items(), 0);
    }

    #[test]
    fn test_registry_preserves_creation_order() {
        let mut registry = BoxRegistry::default();
        registry.push(PackBox::for_catalog("B", &catalog()));
        registry.push(PackBox::for_catalog("A", &catalog()));

        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_rename_keeps_contents_and_position() {
        let mut registry = BoxRegistry::default();
        registry.push(PackBox::for_catalog("Первый", &catalog()));
        registry.push(PackBox::for_catalog("Второй", &catalog()));
        registry.get_mut("Первый").unwrap().set_qty("A1", 4);

        assert!(registry.rename("Первый", "Новый"));

        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["Новый", "Второй"]);
        assert_eq!(registry.get("Новый").unwrap().qty("A1"), 4);
    }

    #[test]
    fn test_total_packed_across_boxes() {
        let mut registry = BoxRegistry::default();
        registry.push(PackBox::for_catalog("К1", &catalog()));
        registry.push(PackBox::for_catalog("К2", &catalog()));
        registry.get_mut("К1").unwrap().set_qty("A1", 3);
        registry.get_mut("К2").unwrap().set_qty("A1", 2);

        assert_eq!(registry.total_packed("A1"), 5);
        assert_eq!(registry.total_packed("A2"), 0);
    }
}
