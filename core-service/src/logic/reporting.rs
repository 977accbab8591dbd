//! Fleet Reporting
//!
//! Dashboard figures computed from the synthetic reference fleet:
//! - Fleet summary (size, average health, predicted failures)
//! - Manufacturing feedback (failure causes per component group)
//!
//! Predictions are in-sample when the fleet is the training fleet.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::FleetResult;
use super::fleet::{rules, Component, FleetDataset};
use super::health::HealthScoreBoard;
use super::model::{MaintenanceStatus, TrainedEstimator};

// ============================================================================
// FLEET SUMMARY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetSummary {
    pub fleet_size: usize,
    /// Mean overall health across vehicles, truncated
    pub average_health: u8,
    /// Vehicles the forest puts above the maintenance threshold
    pub predicted_failures: usize,
    /// Vehicles the failure rule marks as failing
    pub labelled_failures: usize,
    pub mean_failure_probability: f64,
}

pub fn fleet_summary(estimator: &TrainedEstimator, fleet: &FleetDataset) -> FleetResult<FleetSummary> {
    let mut health_sum = 0u64;
    let mut probability_sum = 0.0f64;
    let mut predicted_failures = 0usize;

    for record in fleet.records() {
        let p = estimator.predict(&record.telemetry)?;
        probability_sum += p;
        if MaintenanceStatus::from_probability(p).needs_service() {
            predicted_failures += 1;
        }
        health_sum += HealthScoreBoard::score(&record.telemetry).overall as u64;
    }

    let n = fleet.len();
    let summary = FleetSummary {
        fleet_size: n,
        average_health: if n == 0 { 0 } else { (health_sum / n as u64) as u8 },
        predicted_failures,
        labelled_failures: fleet.failure_count(),
        mean_failure_probability: if n == 0 { 0.0 } else { probability_sum / n as f64 },
    };

    log::debug!("Fleet summary: {:?}", summary);
    Ok(summary)
}

// ============================================================================
// MANUFACTURING FEEDBACK
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentFailures {
    pub component: Component,
    pub label: String,
    pub count: usize,
}

/// Failure-cause counts per component group.
///
/// A vehicle with several causes counts once per distinct component; engine
/// overheat and low oil pressure on the same vehicle count Engine once.
pub fn manufacturing_feedback(fleet: &FleetDataset) -> Vec<ComponentFailures> {
    let mut counts: BTreeMap<Component, usize> =
        Component::ALL.iter().map(|c| (*c, 0)).collect();

    for record in fleet.records() {
        let mut components: Vec<Component> = rules::failure_causes(&record.telemetry)
            .iter()
            .map(|cause| cause.component())
            .collect();
        components.sort();
        components.dedup();

        for component in components {
            *counts.entry(component).or_default() += 1;
        }
    }

    let mut feedback: Vec<ComponentFailures> = counts
        .into_iter()
        .map(|(component, count)| ComponentFailures {
            component,
            label: component.label().to_string(),
            count,
        })
        .collect();

    // Most frequent first, ties in component order
    feedback.sort_by(|a, b| b.count.cmp(&a.count).then(a.component.cmp(&b.component)));
    feedback
}
