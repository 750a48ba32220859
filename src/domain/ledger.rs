// ==========================================
// Warehouse Packer - строка складского реестра
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Строка внешнего складского реестра:
/// накопительный остаток и ячейка хранения артикула
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub article_id: String,
    /// Остаток на складе, не бывает отрицательным
    pub quantity: i64,
    /// Ячейка хранения; пустая строка означает, что ячейка не назначена
    pub cell: String,
}

/// Локальное зеркало реестра по возрастанию артикула
pub type LedgerMirror = BTreeMap<String, LedgerEntry>;
