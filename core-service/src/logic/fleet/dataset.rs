use serde::{Deserialize, Serialize};

use super::record::{LabelledRecord, TelemetryRecord};

/// Ordered collection of labelled telemetry, immutable once built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetDataset {
    /// Seed that produced the dataset, if it was generated
    seed: Option<u64>,
    records: Vec<LabelledRecord>,
}

impl FleetDataset {
    /// Label each record with the failure rule
    pub fn from_records(records: Vec<TelemetryRecord>) -> Self {
        Self {
            seed: None,
            records: records.into_iter().map(LabelledRecord::new).collect(),
        }
    }

    pub(super) fn generated(seed: u64, records: Vec<LabelledRecord>) -> Self {
        Self {
            seed: Some(seed),
            records,
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn records(&self) -> &[LabelledRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn failure_count(&self) -> usize {
        self.records.iter().filter(|r| r.failure).count()
    }

    /// Fraction of failing records; 0.0 for an empty dataset
    pub fn failure_rate(&self) -> f64 {
        if self.records.is_empty() {
            0.0
        } else {
            self.failure_count() as f64 / self.records.len() as f64
        }
    }

    /// True when both label classes are present
    pub fn has_both_classes(&self) -> bool {
        let failures = self.failure_count();
        failures > 0 && failures < self.records.len()
    }
}
