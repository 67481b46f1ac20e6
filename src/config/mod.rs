//! Statistics policy configuration.
//!
//! This module contains the policy value that parameterizes the statistics
//! engine (which weekdays count as holidays, and the canonical night
//! window), plus the loader that reads a policy from a YAML file.

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{NightWindow, StatsPolicy};
