// ==========================================
// Warehouse Packer - доменный слой
// ==========================================

pub mod article;
pub mod boxes;
pub mod ledger;
pub mod types;

pub use article::{Article, ArticleCatalog};
pub use boxes::{BoxRegistry, PackBox};
pub use ledger::{LedgerEntry, LedgerMirror};
pub use types::{ExportSchema, SyncState};
