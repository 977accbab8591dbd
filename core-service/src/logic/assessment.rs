//! Vehicle Assessment - one synchronous scoring pass
//!
//! Per-parameter scores, one forest inference, aggregate and status. A
//! rejected record fails the whole pass; no partial result is returned.

use serde::{Deserialize, Serialize};

use super::error::FleetResult;
use super::fleet::TelemetryRecord;
use super::health::{HealthScoreBoard, Parameter};
use super::model::inference;
use super::model::{MaintenanceStatus, TrainedEstimator};

/// One row of the parameter table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterReading {
    pub parameter: Parameter,
    pub label: String,
    pub value: f64,
    pub unit: String,
    pub low: f64,
    pub high: f64,
    pub health: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleAssessment {
    pub telemetry: TelemetryRecord,
    pub failure_probability: f64,
    pub status: MaintenanceStatus,
    pub message: String,
    pub health: HealthScoreBoard,
    pub readings: Vec<ParameterReading>,
}

impl VehicleAssessment {
    pub fn overall_health(&self) -> u8 {
        self.health.overall
    }
}

pub fn assess(estimator: &TrainedEstimator, record: &TelemetryRecord) -> FleetResult<VehicleAssessment> {
    // Validates the record before anything is scored
    let failure_probability = inference::predict(estimator, record)?;
    let health = HealthScoreBoard::score(record);
    let status = MaintenanceStatus::from_probability(failure_probability);

    let readings = Parameter::ALL
        .iter()
        .map(|p| {
            let bounds = p.bounds();
            ParameterReading {
                parameter: *p,
                label: p.label().to_string(),
                value: p.value(record),
                unit: p.unit().to_string(),
                low: bounds.low,
                high: bounds.high,
                health: health.get(*p).unwrap_or_default(),
            }
        })
        .collect();

    if status.needs_service() {
        log::info!(
            "Maintenance required: p={:.3} health={}% out_of_band={:?}",
            failure_probability,
            health.overall,
            health.out_of_band()
        );
    }

    Ok(VehicleAssessment {
        telemetry: *record,
        failure_probability,
        status,
        message: status.message().to_string(),
        health,
        readings,
    })
}
