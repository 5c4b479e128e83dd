pub mod builder;
pub mod inventory;

pub use builder::{InventoryBuildStats, InventoryBuilder};
pub use inventory::Inventory;
