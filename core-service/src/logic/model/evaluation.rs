//! Agreement between the forest and the closed-form failure rule.
//!
//! Evaluate on a dataset generated with a different seed than the training
//! fleet; evaluating on the training fleet itself only measures fit.

use serde::{Deserialize, Serialize};

use crate::logic::error::{FleetError, FleetResult};
use crate::logic::fleet::FleetDataset;
use super::forest::TrainedEstimator;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub samples: usize,
    /// Decision cut-off used for the confusion counts
    pub cutoff: f64,
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    /// Mean probability over records whose rule label is failure
    pub mean_probability_failing: f64,
    /// Mean probability over records whose rule label is healthy
    pub mean_probability_healthy: f64,
}

pub fn evaluate(
    estimator: &TrainedEstimator,
    dataset: &FleetDataset,
    cutoff: f64,
) -> FleetResult<EvaluationReport> {
    if dataset.is_empty() {
        return Err(FleetError::InvalidInput("evaluation dataset is empty".to_string()));
    }

    let (mut tp, mut fp, mut tn, mut fn_) = (0usize, 0usize, 0usize, 0usize);
    let (mut sum_failing, mut sum_healthy) = (0.0f64, 0.0f64);

    for record in dataset.records() {
        let p = estimator.predict(&record.telemetry)?;
        let predicted = p > cutoff;
        match (predicted, record.failure) {
            (true, true) => tp += 1,
            (true, false) => fp += 1,
            (false, false) => tn += 1,
            (false, true) => fn_ += 1,
        }
        if record.failure {
            sum_failing += p;
        } else {
            sum_healthy += p;
        }
    }

    let ratio = |num: usize, den: usize| if den == 0 { 0.0 } else { num as f64 / den as f64 };
    let failing = tp + fn_;
    let healthy = tn + fp;

    Ok(EvaluationReport {
        samples: dataset.len(),
        cutoff,
        true_positives: tp,
        false_positives: fp,
        true_negatives: tn,
        false_negatives: fn_,
        accuracy: ratio(tp + tn, dataset.len()),
        precision: ratio(tp, tp + fp),
        recall: ratio(tp, failing),
        mean_probability_failing: if failing == 0 { 0.0 } else { sum_failing / failing as f64 },
        mean_probability_healthy: if healthy == 0 { 0.0 } else { sum_healthy / healthy as f64 },
    })
}
