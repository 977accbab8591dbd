//! Error taxonomy for the fleet core
//!
//! All variants are local precondition violations: none are transient and
//! none should be retried.

use thiserror::Error;

pub type FleetResult<T> = Result<T, FleetError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FleetError {
    /// Generator or estimator settings are unusable (e.g. zero fleet size)
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Dataset cannot support a two-class fit
    #[error("training error: {0}")]
    Training(String),

    /// Telemetry is missing a field or carries a non-numeric value
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
