//! Model Module - Failure-risk estimation
//!
//! Random forest over the six telemetry features, the shared compute-once
//! instance, and the fixed maintenance threshold.

pub mod evaluation;
pub mod forest;
pub mod inference;
pub mod threshold;
pub mod tree;


// Re-export common types
pub use evaluation::{evaluate, EvaluationReport};
pub use forest::{train, ModelMetadata, TrainedEstimator};
pub use inference::{shared_estimator, EngineStatus};
pub use threshold::{MaintenanceStatus, MAINTENANCE_THRESHOLD};
