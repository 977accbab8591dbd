//! Fleet Module - Synthetic telemetry and ground-truth labels
//!
//! Produces the training fleet for the failure-risk forest and exports it as
//! JSONL for offline inspection.

pub mod dataset;
pub mod export;
pub mod generator;
pub mod record;
pub mod rules;

#[cfg(test)]
mod tests;

pub use dataset::FleetDataset;
pub use generator::generate;
pub use record::{LabelledRecord, TelemetryInput, TelemetryRecord};
pub use rules::{Component, FailureCause};
