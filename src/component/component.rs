use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::parser::{parse_amount, parse_rating, ComponentRecord, COMPONENT_FIELDS};
use super::spec::{
    Category, ComponentSpec, CpuSpec, GpuSpec, MotherboardSpec, PsuSpec, RamSpec, UnknownCategory,
};
use crate::types::identifiers::ComponentId;

/// Score marking a component as unusable. A component carrying it never
/// enters the inventory, whether it came from a parse failure or the input.
pub const SENTINEL_SCORE: i64 = -1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComponentError {
    #[error("Component line has {0} fields, expected at least {}", COMPONENT_FIELDS)]
    MissingFields(usize),
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),
    #[error("Non-numeric score for {id}: {raw}")]
    NonNumericScore { id: String, raw: String },
    #[error("Non-numeric cost for {id}: {raw}")]
    NonNumericCost { id: String, raw: String },
}

/// One purchasable hardware part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub id: ComponentId,
    pub performance_score: i64,
    pub cost: i64,
    #[serde(flatten)]
    pub spec: ComponentSpec,
}

impl Component {
    pub fn new(id: ComponentId, performance_score: i64, cost: i64, spec: ComponentSpec) -> Self {
        Self {
            id,
            performance_score,
            cost,
            spec,
        }
    }

    /// Build a component from a raw input line.
    ///
    /// Score and cost must parse as integers (negative values are accepted).
    /// Tdp and wattage never fail: non-numeric or negative input becomes 0.
    /// String attributes are kept verbatim.
    pub fn parse(record: &ComponentRecord) -> Result<Self, ComponentError> {
        let [id, category, score, cost, spec1, spec2] = record
            .leading()
            .ok_or(ComponentError::MissingFields(record.fields().len()))?;

        let category: Category = category.parse()?;

        let spec = match category {
            Category::Cpu => ComponentSpec::Cpu(CpuSpec {
                socket: spec1.to_string(),
                tdp: parse_rating(spec2),
            }),
            Category::Motherboard => ComponentSpec::Motherboard(MotherboardSpec {
                socket: spec1.to_string(),
                ram_type: spec2.to_string(),
            }),
            Category::Gpu => ComponentSpec::Gpu(GpuSpec {
                tdp: parse_rating(spec2),
            }),
            Category::Ram => ComponentSpec::Ram(RamSpec {
                ram_type: spec1.to_string(),
            }),
            Category::Psu => ComponentSpec::Psu(PsuSpec {
                wattage: parse_rating(spec1),
            }),
        };

        let performance_score = parse_amount(score).ok_or_else(|| ComponentError::NonNumericScore {
            id: id.to_string(),
            raw: score.to_string(),
        })?;
        let cost = parse_amount(cost).ok_or_else(|| ComponentError::NonNumericCost {
            id: id.to_string(),
            raw: cost.to_string(),
        })?;

        Ok(Component::new(ComponentId::new(id), performance_score, cost, spec))
    }

    pub fn category(&self) -> Category {
        self.spec.category()
    }

    pub fn is_sentinel(&self) -> bool {
        self.performance_score == SENTINEL_SCORE
    }
}
