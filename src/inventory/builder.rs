use std::collections::HashMap;

use tracing::{debug, warn};

use crate::component::{Component, ComponentError, ComponentRecord};
use crate::inventory::inventory::Inventory;

/// Tally of what happened to each record during an inventory build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventoryBuildStats {
    pub records_seen: usize,
    pub admitted: usize,
    pub overwritten: usize,
    pub rejected: usize,
}

/// Builds an [`Inventory`] from raw component lines.
///
/// Every record is absorbed: malformed lines, unknown categories, and
/// non-numeric score or cost are logged and skipped. Duplicate ids are a
/// plain keyed overwrite, so the last valid line for an id wins.
#[derive(Debug, Default)]
pub struct InventoryBuilder {
    stats: InventoryBuildStats,
}

impl InventoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build<'r, I>(mut self, records: I) -> (Inventory, InventoryBuildStats)
    where
        I: IntoIterator<Item = &'r ComponentRecord>,
    {
        let mut entries = HashMap::new();

        for record in records {
            self.stats.records_seen += 1;

            let component = match Component::parse(record) {
                Ok(component) => component,
                Err(err) => {
                    self.log_rejection(&err);
                    self.stats.rejected += 1;
                    continue;
                }
            };

            if component.is_sentinel() {
                debug!(id = %component.id, "component carries sentinel score, skipped");
                self.stats.rejected += 1;
                continue;
            }

            if let Some(previous) = entries.insert(component.id.clone(), component) {
                debug!(id = %previous.id, "duplicate component id, earlier entry replaced");
                self.stats.overwritten += 1;
            } else {
                self.stats.admitted += 1;
            }
        }

        let inventory = Inventory::new(entries);
        debug_assert_eq!(inventory.len(), self.stats.admitted);

        debug!(
            components = inventory.len(),
            rejected = self.stats.rejected,
            version = inventory.version().as_str(),
            "inventory built"
        );

        (inventory, self.stats)
    }

    fn log_rejection(&self, err: &ComponentError) {
        match err {
            ComponentError::NonNumericScore { .. } | ComponentError::NonNumericCost { .. } => {
                warn!("{err}");
            }
            ComponentError::MissingFields(_) | ComponentError::UnknownCategory(_) => {
                debug!("{err}, skipped");
            }
        }
    }
}
