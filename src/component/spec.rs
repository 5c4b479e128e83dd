use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The five required categories, in kit position order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "CPU")]
    Cpu,
    Motherboard,
    #[serde(rename = "GPU")]
    Gpu,
    #[serde(rename = "RAM")]
    Ram,
    #[serde(rename = "PSU")]
    Psu,
}

impl Category {
    /// Position order of a kit line: CPU, Motherboard, GPU, RAM, PSU.
    pub const KIT_ORDER: [Category; 5] = [
        Category::Cpu,
        Category::Motherboard,
        Category::Gpu,
        Category::Ram,
        Category::Psu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cpu => "CPU",
            Category::Motherboard => "Motherboard",
            Category::Gpu => "GPU",
            Category::Ram => "RAM",
            Category::Psu => "PSU",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown component category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    // Case-sensitive: "cpu" is not a category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CPU" => Ok(Category::Cpu),
            "Motherboard" => Ok(Category::Motherboard),
            "GPU" => Ok(Category::Gpu),
            "RAM" => Ok(Category::Ram),
            "PSU" => Ok(Category::Psu),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuSpec {
    pub socket: String,
    pub tdp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotherboardSpec {
    pub socket: String,
    pub ram_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpuSpec {
    pub tdp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RamSpec {
    pub ram_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PsuSpec {
    pub wattage: i64,
}

/// Category-specific attributes. The variant is the component's category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category")]
pub enum ComponentSpec {
    #[serde(rename = "CPU")]
    Cpu(CpuSpec),
    Motherboard(MotherboardSpec),
    #[serde(rename = "GPU")]
    Gpu(GpuSpec),
    #[serde(rename = "RAM")]
    Ram(RamSpec),
    #[serde(rename = "PSU")]
    Psu(PsuSpec),
}

impl ComponentSpec {
    pub fn category(&self) -> Category {
        match self {
            ComponentSpec::Cpu(_) => Category::Cpu,
            ComponentSpec::Motherboard(_) => Category::Motherboard,
            ComponentSpec::Gpu(_) => Category::Gpu,
            ComponentSpec::Ram(_) => Category::Ram,
            ComponentSpec::Psu(_) => Category::Psu,
        }
    }

    pub fn as_cpu(&self) -> Option<&CpuSpec> {
        match self {
            ComponentSpec::Cpu(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn as_motherboard(&self) -> Option<&MotherboardSpec> {
        match self {
            ComponentSpec::Motherboard(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn as_gpu(&self) -> Option<&GpuSpec> {
        match self {
            ComponentSpec::Gpu(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn as_ram(&self) -> Option<&RamSpec> {
        match self {
            ComponentSpec::Ram(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn as_psu(&self) -> Option<&PsuSpec> {
        match self {
            ComponentSpec::Psu(spec) => Some(spec),
            _ => None,
        }
    }

    /// Stable textual form of the attributes, used for inventory hashing.
    pub fn fingerprint(&self) -> String {
        match self {
            ComponentSpec::Cpu(cpu) => format!("socket={};tdp={}", cpu.socket, cpu.tdp),
            ComponentSpec::Motherboard(mb) => {
                format!("socket={};ram_type={}", mb.socket, mb.ram_type)
            }
            ComponentSpec::Gpu(gpu) => format!("tdp={}", gpu.tdp),
            ComponentSpec::Ram(ram) => format!("ram_type={}", ram.ram_type),
            ComponentSpec::Psu(psu) => format!("wattage={}", psu.wattage),
        }
    }
}
