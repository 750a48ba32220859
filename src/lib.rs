// ==========================================
// Warehouse Packer - ядро комплектации
// ==========================================
// Раскладка заказа по коробам со сканированием GTIN,
// контроль лимитов по листу заказа, отгрузки WB/Ozon
// и зеркало складских остатков во внешнем реестре.
// ==========================================

// ==========================================
// Модули
// ==========================================

// Доменный слой - сущности и типы
pub mod domain;

// Сессия комплектации
pub mod session;

// Импорт внешних данных
pub mod importer;

// Сопоставление штрихкодов
pub mod gtin;

// Движки бизнес-правил
pub mod engine;

// Синхронизация с внешним складом
pub mod ledger;

// Настройки подключения
pub mod config;

// Ошибки операций
pub mod error;

// Логирование
pub mod logging;

// ==========================================
// Реэкспорт основных типов
// ==========================================

// Доменные типы
pub use domain::{
    Article, ArticleCatalog, BoxRegistry, ExportSchema, LedgerEntry, PackBox, SyncState,
};

// Сессия
pub use session::PackingSession;

// Движки
pub use engine::{
    AllocationEngine, ExportEngine, OzonShipmentRow, PackedRow, RemainingCalculator,
    RemainingSummary, ScanResult, ShipmentRows, WbShipmentRow,
};

// Сопоставление
pub use gtin::GtinMapping;

// Синхронизация
pub use ledger::{InMemoryTransport, LedgerSyncAdapter, LedgerTransport, SheetsTransport};

// Настройки
pub use config::LedgerConfig;

// Ошибки
pub use error::{PackError, PackResult};

// ==========================================
// Константы
// ==========================================

// Версия пакета
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Имя приложения
pub const APP_NAME: &str = "Warehouse Packer";
