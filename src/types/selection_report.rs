use std::fmt;

use serde::{Deserialize, Serialize};

use super::identifiers::{InventoryVersion, KitId};

/// Printed in place of a kit id when no kit qualified.
pub const NO_BUILD: &str = "NONE";

/// Counters describing how every kit in the scan was disposed of.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionMetadata {
    pub budget: i64,
    pub components_in_inventory: usize,
    pub inventory_version: Option<InventoryVersion>,

    pub kits_considered: usize,
    pub kits_malformed: usize,
    pub kits_unresolvable: usize,
    pub kits_incompatible: usize,
    pub kits_over_budget: usize,
    pub kits_valid: usize,
}

/// Outcome of a best-build scan.
///
/// `best_kit` is `None` when no valid kit scored above zero. A valid kit
/// scoring exactly 0 is reported the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub best_score: i64,
    pub best_kit: Option<KitId>,
    pub selection: SelectionMetadata,
}

impl SelectionResult {
    /// The result emitted when input could not be processed at all.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn best_kit_label(&self) -> &str {
        self.best_kit.as_ref().map_or(NO_BUILD, KitId::as_str)
    }
}

/// The two output lines, without a trailing newline.
impl fmt::Display for SelectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Maximum Score: {}", self.best_score)?;
        write!(f, "Best Build: {}", self.best_kit_label())
    }
}
