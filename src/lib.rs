//! Deterministic PC-build compatibility validation and best-kit selection.
//!
//! `buildkit-core` parses a component inventory and a list of candidate build
//! kits, checks each kit against the socket, RAM-type, and PSU-headroom rules
//! plus a budget, and reports the highest-scoring valid kit. All operations
//! are deterministic: identical inputs always produce identical outputs.

pub mod component;
pub mod input;
pub mod inventory;
pub mod selection;
pub mod types;
