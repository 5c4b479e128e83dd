use thiserror::Error;

use crate::selection::config::SelectorConfig;
use crate::selection::kit::ResolvedBuild;

/// The first compatibility rule a build broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Incompatibility {
    #[error("CPU socket {cpu} does not match motherboard socket {motherboard}")]
    SocketMismatch { cpu: String, motherboard: String },
    #[error("RAM type {ram} does not match motherboard RAM type {motherboard}")]
    RamTypeMismatch { ram: String, motherboard: String },
    #[error("PSU supplies {wattage}W, build needs {required}W")]
    InsufficientPower { wattage: i64, required: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Incompatible(Incompatibility),
    OverBudget { total_cost: i64, budget: i64 },
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

pub trait CompatibilityRule {
    fn check(&self, build: &ResolvedBuild<'_>) -> Result<(), Incompatibility>;
}

/// CPU and motherboard sockets must be byte-for-byte equal.
#[derive(Debug, Default)]
pub struct SocketMatch;

impl CompatibilityRule for SocketMatch {
    fn check(&self, build: &ResolvedBuild<'_>) -> Result<(), Incompatibility> {
        let cpu = &build.cpu.spec.socket;
        let motherboard = &build.motherboard.spec.socket;
        if cpu == motherboard {
            Ok(())
        } else {
            Err(Incompatibility::SocketMismatch {
                cpu: cpu.clone(),
                motherboard: motherboard.clone(),
            })
        }
    }
}

/// RAM type must equal the motherboard's supported RAM type exactly.
#[derive(Debug, Default)]
pub struct RamTypeMatch;

impl CompatibilityRule for RamTypeMatch {
    fn check(&self, build: &ResolvedBuild<'_>) -> Result<(), Incompatibility> {
        let ram = &build.ram.spec.ram_type;
        let motherboard = &build.motherboard.spec.ram_type;
        if ram == motherboard {
            Ok(())
        } else {
            Err(Incompatibility::RamTypeMismatch {
                ram: ram.clone(),
                motherboard: motherboard.clone(),
            })
        }
    }
}

/// wattage >= cpu.tdp + gpu.tdp + buffer
#[derive(Debug)]
pub struct PowerHeadroom {
    pub buffer_watts: i64,
}

impl PowerHeadroom {
    pub fn required_watts(&self, build: &ResolvedBuild<'_>) -> i64 {
        build
            .cpu
            .spec
            .tdp
            .saturating_add(build.gpu.spec.tdp)
            .saturating_add(self.buffer_watts)
    }
}

impl CompatibilityRule for PowerHeadroom {
    fn check(&self, build: &ResolvedBuild<'_>) -> Result<(), Incompatibility> {
        let required = self.required_watts(build);
        let wattage = build.psu.spec.wattage;
        if wattage >= required {
            Ok(())
        } else {
            Err(Incompatibility::InsufficientPower { wattage, required })
        }
    }
}

/// Evaluates a resolved build: the three compatibility rules in order,
/// then the budget. The first failure decides the verdict.
#[derive(Debug)]
pub struct CompatibilityEngine {
    socket: SocketMatch,
    ram_type: RamTypeMatch,
    power: PowerHeadroom,
}

impl Default for CompatibilityEngine {
    fn default() -> Self {
        Self::new(&SelectorConfig::v0())
    }
}

impl CompatibilityEngine {
    pub fn new(config: &SelectorConfig) -> Self {
        Self {
            socket: SocketMatch,
            ram_type: RamTypeMatch,
            power: PowerHeadroom {
                buffer_watts: config.psu_buffer_watts,
            },
        }
    }

    pub fn rules(&self) -> [&dyn CompatibilityRule; 3] {
        [&self.socket, &self.ram_type, &self.power]
    }

    pub fn evaluate(&self, build: &ResolvedBuild<'_>, budget: i64) -> Verdict {
        if let Err(incompatibility) = self.rules().iter().try_for_each(|rule| rule.check(build)) {
            return Verdict::Incompatible(incompatibility);
        }

        // Inclusive: spending the whole budget is allowed.
        if build.total_cost > budget {
            return Verdict::OverBudget {
                total_cost: build.total_cost,
                budget,
            };
        }

        Verdict::Valid
    }

    pub fn is_valid(&self, build: &ResolvedBuild<'_>, budget: i64) -> bool {
        self.evaluate(build, budget).is_valid()
    }
}
