// Read-only after construction:
// no insert
// no remove
// lookups only

use std::collections::HashMap;

use crate::component::Component;
use crate::types::identifiers::{ComponentId, InventoryVersion};

#[derive(Debug, Clone)]
pub struct Inventory {
    entries: HashMap<ComponentId, Component>,
    version: InventoryVersion,
}

impl Inventory {
    pub(crate) fn new(entries: HashMap<ComponentId, Component>) -> Self {
        let version = version_of(&entries);
        Self { entries, version }
    }

    pub fn get(&self, id: &str) -> Option<&Component> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn version(&self) -> &InventoryVersion {
        &self.version
    }

    /// Components in ascending id order.
    pub fn iter_sorted(&self) -> impl Iterator<Item = &Component> {
        sorted(&self.entries).into_iter()
    }
}

fn sorted(entries: &HashMap<ComponentId, Component>) -> Vec<&Component> {
    let mut components: Vec<&Component> = entries.values().collect();
    components.sort_by(|a, b| a.id.cmp(&b.id));
    components
}

// "id:category:score:cost:attributes", one line per component, sorted by id
fn version_of(entries: &HashMap<ComponentId, Component>) -> InventoryVersion {
    let lines = sorted(entries).into_iter().map(|c| {
        format!(
            "{}:{}:{}:{}:{}",
            c.id.as_str(),
            c.category(),
            c.performance_score,
            c.cost,
            c.spec.fingerprint()
        )
    });

    InventoryVersion::from_lines(lines)
}
