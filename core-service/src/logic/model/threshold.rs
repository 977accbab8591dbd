//! Maintenance Threshold
//!
//! Maps a failure probability to the vehicle's maintenance state.
//! Single fixed cut-off; strictly greater than 0.7 needs maintenance.

use serde::{Deserialize, Serialize};

pub use crate::constants::MAINTENANCE_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    /// Vehicle operating normally
    Normal,
    /// Proactive maintenance required
    MaintenanceRequired,
}

impl MaintenanceStatus {
    pub fn from_probability(probability: f64) -> Self {
        if probability > MAINTENANCE_THRESHOLD {
            MaintenanceStatus::MaintenanceRequired
        } else {
            MaintenanceStatus::Normal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceStatus::Normal => "normal",
            MaintenanceStatus::MaintenanceRequired => "maintenance_required",
        }
    }

    /// Banner text shown on the vehicle page
    pub fn message(&self) -> &'static str {
        match self {
            MaintenanceStatus::Normal => "Vehicle Operating Normally",
            MaintenanceStatus::MaintenanceRequired => "Proactive Maintenance Required",
        }
    }

    pub fn needs_service(&self) -> bool {
        matches!(self, MaintenanceStatus::MaintenanceRequired)
    }
}

impl std::fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_value() {
        assert_eq!(MAINTENANCE_THRESHOLD, 0.7);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(MaintenanceStatus::from_probability(0.7), MaintenanceStatus::Normal);
        assert_eq!(
            MaintenanceStatus::from_probability(0.7001),
            MaintenanceStatus::MaintenanceRequired
        );
        assert_eq!(MaintenanceStatus::from_probability(0.0), MaintenanceStatus::Normal);
        assert!(MaintenanceStatus::from_probability(1.0).needs_service());
    }

    #[test]
    fn test_serialized_name() {
        let json = serde_json::to_string(&MaintenanceStatus::MaintenanceRequired).unwrap();
        assert_eq!(json, "\"maintenance_required\"");
    }
}
