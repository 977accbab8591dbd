//! Logic Module - Fleet health engines
//!
//! - `fleet/` - Synthetic telemetry, failure rule, JSONL export
//! - `features/` - Feature layout and validated vectors
//! - `model/` - Random forest, shared estimator, maintenance threshold
//! - `health/` - Per-parameter display scores
//! - `assessment`, `scheduling`, `reporting` - Dashboard pipelines

pub mod config;
pub mod error;

pub mod features;
pub mod fleet;
pub mod health;
pub mod model;

pub mod assessment;
pub mod reporting;
pub mod scheduling;
