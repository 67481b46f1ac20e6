//! Policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading a statistics
//! policy from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{StatsError, StatsResult};

use super::types::StatsPolicy;

/// Loads and provides access to a statistics policy.
///
/// # File format
///
/// ```yaml
/// holiday_weekdays:
///   - Sun
/// night_window:
///   start: "22:00:00"
///   end: "06:00:00"
/// ```
///
/// # Example
///
/// ```no_run
/// use roster_stats::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/default.yaml").unwrap();
/// let policy = loader.policy();
/// assert_eq!(policy.night_credit().num_hours(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    policy: StatsPolicy,
}

impl PolicyLoader {
    /// Loads a policy from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the policy file (e.g., "./config/default.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` instance on success, or an error if the
    /// file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> StatsResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| StatsError::PolicyNotFound {
            path: path_str.clone(),
        })?;

        let policy = serde_yaml::from_str(&content).map_err(|e| StatsError::PolicyParseError {
            path: path_str,
            message: e.to_string(),
        })?;

        Ok(Self { policy })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &StatsPolicy {
        &self.policy
    }
}
