//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! Each default can be overridden by an environment variable.

/// Seed used for the synthetic reference fleet
pub const DEFAULT_FLEET_SEED: u64 = 42;

/// Number of vehicles in the synthetic reference fleet
pub const DEFAULT_FLEET_SIZE: usize = 500;

/// Number of trees in the failure-risk forest
pub const DEFAULT_FOREST_TREES: usize = 120;

/// Maximum depth of each tree
pub const DEFAULT_FOREST_MAX_DEPTH: usize = 8;

/// Seed for bootstrap sampling and split-feature selection
pub const DEFAULT_FOREST_SEED: u64 = 7;

/// Probability above which a vehicle needs proactive maintenance.
/// Fixed: not exposed through the environment.
pub const MAINTENANCE_THRESHOLD: f64 = 0.7;

/// Default service hub for automatically scheduled maintenance
pub const DEFAULT_SERVICE_HUB: &str = "Hyderabad Service Hub";

/// Days between scheduling and the service appointment
pub const DEFAULT_SERVICE_LEAD_DAYS: i64 = 3;

/// Longest accepted booking horizon (days)
pub const MAX_SERVICE_LEAD_DAYS: i64 = 365;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "AutoCare";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get service hub from environment or use default
pub fn get_service_hub() -> String {
    std::env::var("SERVICE_HUB")
        .unwrap_or_else(|_| DEFAULT_SERVICE_HUB.to_string())
}
