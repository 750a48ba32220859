// ==========================================
// Warehouse Packer - движки бизнес-правил
// ==========================================

pub mod allocation;
pub mod export;
pub mod remaining;

pub use allocation::{AllocationEngine, ScanResult};
pub use export::{
    ExportEngine, OzonShipmentRow, PackedRow, ShipmentRows, WbShipmentRow,
};
pub use remaining::{RemainingCalculator, RemainingSummary};
