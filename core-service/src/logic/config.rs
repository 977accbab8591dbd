//! Estimator configuration
//!
//! Gathers the generator and forest settings. Defaults come from
//! `constants.rs`; `from_env` applies environment overrides.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FLEET_SEED, DEFAULT_FLEET_SIZE, DEFAULT_FOREST_MAX_DEPTH, DEFAULT_FOREST_SEED,
    DEFAULT_FOREST_TREES,
};
use super::error::{FleetError, FleetResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Seed for the synthetic training fleet
    pub fleet_seed: u64,
    /// Number of synthetic vehicles
    pub fleet_size: usize,
    /// Number of trees in the forest
    pub n_trees: usize,
    /// Maximum tree depth (root = depth 0)
    pub max_depth: usize,
    /// Minimum samples a node needs before it may split
    pub min_samples_split: usize,
    /// Seed for bootstrap sampling and candidate feature selection
    pub training_seed: u64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            fleet_seed: DEFAULT_FLEET_SEED,
            fleet_size: DEFAULT_FLEET_SIZE,
            n_trees: DEFAULT_FOREST_TREES,
            max_depth: DEFAULT_FOREST_MAX_DEPTH,
            min_samples_split: 2,
            training_seed: DEFAULT_FOREST_SEED,
        }
    }
}

impl EstimatorConfig {
    /// Load configuration from environment variables, falling back to defaults.
    ///
    /// A variable that is set but does not parse is rejected rather than ignored.
    pub fn from_env() -> FleetResult<Self> {
        let defaults = Self::default();
        let config = Self {
            fleet_seed: env_or("FLEET_SEED", defaults.fleet_seed)?,
            fleet_size: env_or("FLEET_SIZE", defaults.fleet_size)?,
            n_trees: env_or("FOREST_TREES", defaults.n_trees)?,
            max_depth: env_or("FOREST_MAX_DEPTH", defaults.max_depth)?,
            min_samples_split: defaults.min_samples_split,
            training_seed: env_or("FOREST_SEED", defaults.training_seed)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> FleetResult<()> {
        if self.fleet_size == 0 {
            return Err(FleetError::InvalidConfiguration(
                "fleet size must be positive".to_string(),
            ));
        }
        if self.n_trees == 0 {
            return Err(FleetError::InvalidConfiguration(
                "forest needs at least one tree".to_string(),
            ));
        }
        if self.min_samples_split < 2 {
            return Err(FleetError::InvalidConfiguration(
                "min_samples_split must be at least 2".to_string(),
            ));
        }
        Ok(())
    }
}

pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> FleetResult<T> {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            FleetError::InvalidConfiguration(format!("{key}={raw:?} is not a valid value"))
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_reference() {
        let config = EstimatorConfig::default();
        assert_eq!(config.fleet_seed, 42);
        assert_eq!(config.fleet_size, 500);
        assert_eq!(config.n_trees, 120);
        assert_eq!(config.max_depth, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_size_rejected() {
        let config = EstimatorConfig {
            fleet_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(FleetError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_zero_trees_rejected() {
        let config = EstimatorConfig {
            n_trees: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unparsable_env_value_rejected() {
        std::env::set_var("AUTOCARE_TEST_BAD_NUMBER", "-12");
        let parsed: FleetResult<usize> = env_or("AUTOCARE_TEST_BAD_NUMBER", 5);
        assert!(matches!(parsed, Err(FleetError::InvalidConfiguration(_))));
        std::env::remove_var("AUTOCARE_TEST_BAD_NUMBER");
    }

    #[test]
    fn test_missing_env_value_uses_default() {
        let parsed: FleetResult<u64> = env_or("AUTOCARE_TEST_UNSET_VARIABLE", 9);
        assert_eq!(parsed, Ok(9));
    }
}
