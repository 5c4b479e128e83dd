pub mod compatibility;
pub mod config;
pub mod kit;

use tracing::{debug, info};

use crate::input::BuildInput;
use crate::inventory::{Inventory, InventoryBuilder};
use crate::types::identifiers::KitId;
use crate::types::selection_report::{SelectionMetadata, SelectionResult};
pub use compatibility::{
    CompatibilityEngine, CompatibilityRule, Incompatibility, PowerHeadroom, RamTypeMatch,
    SocketMatch, Verdict,
};
pub use config::SelectorConfig;
pub use kit::{BuildKit, KitError, KitRecord, Part, ResolvedBuild, KIT_FIELDS};

/// Scans kits in input order and keeps the highest-scoring valid one.
#[derive(Debug, Default)]
pub struct BuildSelector {
    engine: CompatibilityEngine,
}

/// Fold accumulator for one scan.
struct Scan {
    best_score: i64,
    best_kit: Option<KitId>,
    metadata: SelectionMetadata,
}

impl BuildSelector {
    pub fn new(config: &SelectorConfig) -> Self {
        Self {
            engine: CompatibilityEngine::new(config),
        }
    }

    /// Run the whole pipeline over parsed input.
    ///
    /// An unparseable budget short-circuits to the empty result without
    /// building an inventory.
    pub fn select_input(&self, input: &BuildInput) -> SelectionResult {
        let Some(budget) = input.budget else {
            debug!("budget missing or unparseable, no kits evaluated");
            return SelectionResult::none();
        };

        let (inventory, _) = InventoryBuilder::new().build(&input.components);
        self.select(&inventory, &input.kits, budget)
    }

    pub fn select<'k, I>(&self, inventory: &Inventory, kits: I, budget: i64) -> SelectionResult
    where
        I: IntoIterator<Item = &'k KitRecord>,
    {
        let initial = Scan {
            best_score: 0,
            best_kit: None,
            metadata: SelectionMetadata {
                budget,
                components_in_inventory: inventory.len(),
                inventory_version: Some(inventory.version().clone()),
                ..SelectionMetadata::default()
            },
        };

        let scan = kits
            .into_iter()
            .fold(initial, |scan, record| self.step(scan, inventory, record, budget));

        let metadata = scan.metadata;
        debug_assert_eq!(
            metadata.kits_considered,
            metadata.kits_malformed
                + metadata.kits_unresolvable
                + metadata.kits_incompatible
                + metadata.kits_over_budget
                + metadata.kits_valid
        );

        info!(
            kits = metadata.kits_considered,
            valid = metadata.kits_valid,
            best_score = scan.best_score,
            best_kit = scan.best_kit.as_ref().map(KitId::as_str),
            "kit scan finished"
        );

        SelectionResult {
            best_score: scan.best_score,
            best_kit: scan.best_kit,
            selection: metadata,
        }
    }

    fn step(&self, mut scan: Scan, inventory: &Inventory, record: &KitRecord, budget: i64) -> Scan {
        scan.metadata.kits_considered += 1;

        let kit = match BuildKit::parse(record) {
            Ok(kit) => kit,
            Err(err) => {
                debug!("{err}, skipped");
                scan.metadata.kits_malformed += 1;
                return scan;
            }
        };

        let build = match kit.resolve(inventory) {
            Ok(build) => build,
            Err(err) => {
                debug!("{err}, skipped");
                scan.metadata.kits_unresolvable += 1;
                return scan;
            }
        };

        match self.engine.evaluate(&build, budget) {
            Verdict::Valid => {
                scan.metadata.kits_valid += 1;
                // Strictly greater: on ties the earlier kit stays best.
                if build.total_performance_score > scan.best_score {
                    scan.best_score = build.total_performance_score;
                    scan.best_kit = Some(build.kit_id.clone());
                }
            }
            Verdict::Incompatible(reason) => {
                debug!(kit = %build.kit_id, "{reason}");
                scan.metadata.kits_incompatible += 1;
            }
            Verdict::OverBudget { total_cost, budget } => {
                debug!(kit = %build.kit_id, total_cost, budget, "kit over budget");
                scan.metadata.kits_over_budget += 1;
            }
        }

        scan
    }
}
