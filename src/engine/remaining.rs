// ==========================================
// Warehouse Packer - калькулятор остатков
// ==========================================
// Чистые вычисления поверх сессии; пересчёт по требованию,
// без промежуточных кэшей.
// ==========================================

use crate::session::PackingSession;

/// Сводные показатели для шапки таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemainingSummary {
    /// Позиций в листе
    pub article_count: usize,
    /// Штук в выбранном коробе
    pub selected_box_total: u32,
    /// Осталось распределить по всем артикулам
    pub total_remaining: u32,
}

/// Калькулятор остатков
pub struct RemainingCalculator;

impl RemainingCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Остаток по артикулу: требуемое минус упакованное
    /// по всем коробам
    pub fn per_article(&self, session: &PackingSession, article_id: &str) -> u32 {
        let required = session.catalog().required_qty(article_id).unwrap_or(0);
        required.saturating_sub(session.total_packed(article_id))
    }

    /// Суммарный остаток по листу
    pub fn total(&self, session: &PackingSession) -> u32 {
        session
            .catalog()
            .iter()
            .map(|(article_id, _)| self.per_article(session, article_id))
            .sum()
    }

    /// Штук в выбранном коробе
    pub fn selected_box_total(&self, session: &PackingSession) -> u32 {
        session
            .selected_box()
            .map(|b| b.total_items())
            .unwrap_or(0)
    }

    /// Сводка для обновления экрана
    pub fn summary(&self, session: &PackingSession) -> RemainingSummary {
        RemainingSummary {
            article_count: session.catalog().len(),
            selected_box_total: self.selected_box_total(session),
            total_remaining: self.total(session),
        }
    }

    /// Первый артикул с положительным остатком
    /// (для подсветки строки таблицы)
    pub fn first_unfilled<'a>(&self, session: &'a PackingSession) -> Option<&'a str> {
        session
            .catalog()
            .iter()
            .map(|(article_id, _)| article_id)
            .find(|article_id| self.per_article(session, article_id) > 0)
    }
}

impl Default for RemainingCalculator {
    fn default() -> Self {
        Self::new()
    }
}
