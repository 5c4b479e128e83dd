pub mod identifiers;
pub mod selection_report;

pub use identifiers::{ComponentId, InventoryVersion, KitId};
pub use selection_report::{SelectionMetadata, SelectionResult, NO_BUILD};
