// ==========================================
// Warehouse Packer - сессия комплектации
// ==========================================
// Каталог, короба и выбранный короб как единое явное значение.
// Валидация предшествует любому изменению состояния.
// ==========================================

use crate::domain::article::{Article, ArticleCatalog};
use crate::domain::boxes::{BoxRegistry, PackBox};
use crate::error::{PackError, PackResult};
use serde::{Deserialize, Serialize};

/// Сессия комплектации: существует с момента импорта листа заказа
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackingSession {
    catalog: ArticleCatalog,
    boxes: BoxRegistry,
    selected: Option<String>,
}

impl PackingSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ==========================================
    // Доступ к состоянию
    // ==========================================

    pub fn catalog(&self) -> &ArticleCatalog {
        &self.catalog
    }

    pub fn boxes(&self) -> &BoxRegistry {
        &self.boxes
    }

    /// Имя выбранного короба
    pub fn selected_name(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Выбранный короб
    pub fn selected_box(&self) -> Option<&PackBox> {
        self.selected.as_deref().and_then(|name| self.boxes.get(name))
    }

    fn selected_box_mut(&mut self) -> Option<&mut PackBox> {
        let name = self.selected.clone()?;
        self.boxes.get_mut(&name)
    }

    /// Упаковано по артикулу суммарно по всем коробам
    pub fn total_packed(&self, article_id: &str) -> u32 {
        self.boxes.total_packed(article_id)
    }

    // ==========================================
    // Импорт листа заказа
    // ==========================================

    /// Замена каталога целиком. Короба и выбор сбрасываются:
    /// комплектация начинается заново.
    pub fn load_catalog(&mut self, rows: Vec<Article>) -> PackResult<usize> {
        if rows.is_empty() {
            return Err(PackError::Validation(
                "лист не содержит ни одной позиции".to_string(),
            ));
        }

        self.catalog = ArticleCatalog::from_rows(rows);
        self.boxes.clear();
        self.selected = None;

        tracing::info!(
            articles = self.catalog.len(),
            "каталог заменён, комплектация сброшена"
        );
        Ok(self.catalog.len())
    }

    // ==========================================
    // Операции с коробами
    // ==========================================

    /// Новый пустой короб; он же становится выбранным
    pub fn add_box(&mut self, name: &str) -> PackResult<()> {
        if self.catalog.is_empty() {
            return Err(PackError::Precondition("сначала загрузите лист".to_string()));
        }

        let name = name.trim();
        if name.is_empty() {
            return Err(PackError::Validation(
                "имя короба не может быть пустым".to_string(),
            ));
        }
        if self.boxes.contains(name) {
            return Err(PackError::Validation(format!(
                "короб «{name}» уже существует"
            )));
        }

        self.boxes.push(PackBox::for_catalog(name, &self.catalog));
        self.selected = Some(name.to_string());
        tracing::debug!(box_name = name, "короб создан и выбран");
        Ok(())
    }

    /// Переименование с сохранением содержимого; выбор следует за именем
    pub fn rename_box(&mut self, old_name: &str, new_name: &str) -> PackResult<()> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(PackError::Validation(
                "имя короба не может быть пустым".to_string(),
            ));
        }
        if self.boxes.contains(new_name) {
            return Err(PackError::Validation(format!(
                "короб «{new_name}» уже существует"
            )));
        }
        if !self.boxes.rename(old_name, new_name) {
            return Err(PackError::not_found("Короб", old_name));
        }

        if self.selected.as_deref() == Some(old_name) {
            self.selected = Some(new_name.to_string());
        }
        tracing::debug!(old = old_name, new = new_name, "короб переименован");
        Ok(())
    }

    /// Удаление короба; его количества перестают учитываться в итогах
    pub fn delete_box(&mut self, name: &str) -> PackResult<()> {
        if self.boxes.remove(name).is_none() {
            return Err(PackError::not_found("Короб", name));
        }

        if self.selected.as_deref() == Some(name) {
            self.selected = None;
        }
        tracing::debug!(box_name = name, "короб удалён");
        Ok(())
    }

    /// Выбор текущего короба для скана и ручной правки
    pub fn select_box(&mut self, name: &str) -> PackResult<()> {
        if !self.boxes.contains(name) {
            return Err(PackError::not_found("Короб", name));
        }
        self.selected = Some(name.to_string());
        Ok(())
    }

    // ==========================================
    // Изменение содержимого выбранного короба
    // ==========================================

    /// +1 к артикулу в выбранном коробе; возвращает новое количество
    pub(crate) fn increment_selected(&mut self, article_id: &str) -> PackResult<u32> {
        let pack_box = self
            .selected_box_mut()
            .ok_or_else(|| PackError::Precondition("не выбран короб".to_string()))?;
        pack_box.increment(article_id);
        Ok(pack_box.qty(article_id))
    }

    /// Точное количество артикула в выбранном коробе
    pub(crate) fn set_selected_qty(&mut self, article_id: &str, qty: u32) -> PackResult<()> {
        let pack_box = self
            .selected_box_mut()
            .ok_or_else(|| PackError::Precondition("не выбран короб".to_string()))?;
        pack_box.set_qty(article_id, qty);
        Ok(())
    }
}
