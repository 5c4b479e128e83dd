use thiserror::Error;

use crate::component::{
    Category, Component, ComponentSpec, CpuSpec, GpuSpec, MotherboardSpec, PsuSpec, RamSpec,
};
use crate::inventory::Inventory;
use crate::types::identifiers::{ComponentId, KitId};

/// A kit line is the kit id followed by exactly five component ids.
pub const KIT_FIELDS: usize = 6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KitError {
    #[error("Kit line has {0} fields, expected exactly {}", KIT_FIELDS)]
    Malformed(usize),
    #[error("Kit {kit} references unknown {position} component {id}")]
    UnknownComponent {
        kit: KitId,
        position: Category,
        id: ComponentId,
    },
    #[error("Kit {kit} expects a {expected} at this position but {id} is a {found}")]
    CategoryMismatch {
        kit: KitId,
        expected: Category,
        found: Category,
        id: ComponentId,
    },
}

/// One whitespace-split kit line, as read from input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KitRecord {
    fields: Vec<String>,
}

impl KitRecord {
    pub fn from_line(line: &str) -> Self {
        Self {
            fields: line.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

/// A kit id plus one component reference per position, CPU first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildKit {
    pub id: KitId,
    pub parts: [ComponentId; 5],
}

impl BuildKit {
    pub fn parse(record: &KitRecord) -> Result<Self, KitError> {
        match record.fields() {
            [id, cpu, motherboard, gpu, ram, psu] => Ok(BuildKit {
                id: KitId::new(id.as_str()),
                parts: [cpu, motherboard, gpu, ram, psu].map(|p| ComponentId::new(p.as_str())),
            }),
            other => Err(KitError::Malformed(other.len())),
        }
    }

    /// Look every reference up in `inventory`, position by position.
    ///
    /// Stops at the first missing id or wrong category; there is no partial
    /// resolution.
    pub fn resolve<'a>(&'a self, inventory: &'a Inventory) -> Result<ResolvedBuild<'a>, KitError> {
        let [cpu, motherboard, gpu, ram, psu] = &self.parts;

        let cpu = self.part(inventory, Category::Cpu, cpu, ComponentSpec::as_cpu)?;
        let motherboard = self.part(
            inventory,
            Category::Motherboard,
            motherboard,
            ComponentSpec::as_motherboard,
        )?;
        let gpu = self.part(inventory, Category::Gpu, gpu, ComponentSpec::as_gpu)?;
        let ram = self.part(inventory, Category::Ram, ram, ComponentSpec::as_ram)?;
        let psu = self.part(inventory, Category::Psu, psu, ComponentSpec::as_psu)?;

        Ok(ResolvedBuild::new(&self.id, cpu, motherboard, gpu, ram, psu))
    }

    fn part<'a, S: 'a>(
        &self,
        inventory: &'a Inventory,
        expected: Category,
        id: &ComponentId,
        extract: fn(&ComponentSpec) -> Option<&S>,
    ) -> Result<Part<'a, S>, KitError> {
        let component = inventory
            .get(id.as_str())
            .ok_or_else(|| KitError::UnknownComponent {
                kit: self.id.clone(),
                position: expected,
                id: id.clone(),
            })?;

        let spec = extract(&component.spec).ok_or_else(|| KitError::CategoryMismatch {
            kit: self.id.clone(),
            expected,
            found: component.category(),
            id: id.clone(),
        })?;

        Ok(Part { component, spec })
    }
}

/// A resolved component together with its category-specific attributes.
#[derive(Debug)]
pub struct Part<'a, S> {
    pub component: &'a Component,
    pub spec: &'a S,
}

impl<S> Clone for Part<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Part<'_, S> {}

/// The five components a kit resolves to, with derived totals.
/// Lives only for the duration of one kit's evaluation.
#[derive(Debug, Clone)]
pub struct ResolvedBuild<'a> {
    pub kit_id: &'a KitId,
    pub cpu: Part<'a, CpuSpec>,
    pub motherboard: Part<'a, MotherboardSpec>,
    pub gpu: Part<'a, GpuSpec>,
    pub ram: Part<'a, RamSpec>,
    pub psu: Part<'a, PsuSpec>,

    pub total_cost: i64,
    pub total_performance_score: i64,
}

impl<'a> ResolvedBuild<'a> {
    pub fn new(
        kit_id: &'a KitId,
        cpu: Part<'a, CpuSpec>,
        motherboard: Part<'a, MotherboardSpec>,
        gpu: Part<'a, GpuSpec>,
        ram: Part<'a, RamSpec>,
        psu: Part<'a, PsuSpec>,
    ) -> Self {
        let components = [
            cpu.component,
            motherboard.component,
            gpu.component,
            ram.component,
            psu.component,
        ];

        let total_cost = components
            .iter()
            .fold(0i64, |acc, c| acc.saturating_add(c.cost));
        let total_performance_score = components
            .iter()
            .fold(0i64, |acc, c| acc.saturating_add(c.performance_score));

        Self {
            kit_id,
            cpu,
            motherboard,
            gpu,
            ram,
            psu,
            total_cost,
            total_performance_score,
        }
    }
}
