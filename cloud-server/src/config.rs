//! Configuration module

use std::env;

use autocare_core::logic::scheduling::SchedulingPolicy;
use autocare_core::{EstimatorConfig, FleetResult};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// Fleet generator + forest settings
    pub estimator: EstimatorConfig,

    /// Service hub and lead time for automatic scheduling
    pub scheduling: SchedulingPolicy,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> FleetResult<Self> {
        Ok(Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),

            estimator: EstimatorConfig::from_env()?,

            scheduling: SchedulingPolicy::from_env()?,
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            environment: "development".to_string(),
            estimator: EstimatorConfig::default(),
            scheduling: SchedulingPolicy::default(),
        }
    }
}
