//! AutoCare Core - fleet health estimation
//!
//! Synthetic fleet generation, a random-forest failure-risk estimator trained
//! once per process, and per-parameter health scoring.

pub mod constants;
pub mod logic;

pub use logic::assessment::{assess, VehicleAssessment};
pub use logic::config::EstimatorConfig;
pub use logic::error::{FleetError, FleetResult};
pub use logic::fleet::{generate, FleetDataset, TelemetryInput, TelemetryRecord};
pub use logic::health::{overall_health, score_parameter, HealthScoreBoard, Parameter};
pub use logic::model::{shared_estimator, train, MaintenanceStatus, TrainedEstimator};
