pub mod component;
pub mod parser;
pub mod spec;

pub use crate::types::identifiers::ComponentId;
pub use component::{Component, ComponentError, SENTINEL_SCORE};
pub use parser::ComponentRecord;
pub use spec::{
    Category, ComponentSpec, CpuSpec, GpuSpec, MotherboardSpec, PsuSpec, RamSpec, UnknownCategory,
};
