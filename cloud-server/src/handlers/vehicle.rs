//! Vehicle health handlers

use axum::{extract::{rejection::JsonRejection, State}, Json};

use autocare_core::{assess, TelemetryInput, TelemetryRecord, VehicleAssessment};

use crate::{AppResult, AppState};

/// Assessment of the dashboard's default vehicle
pub async fn default_vehicle(State(state): State<AppState>) -> AppResult<Json<VehicleAssessment>> {
    let assessment = assess(state.estimator, &TelemetryRecord::reference_vehicle())?;
    Ok(Json(assessment))
}

/// Score one vehicle's telemetry
pub async fn assess_vehicle(
    State(state): State<AppState>,
    payload: Result<Json<TelemetryInput>, JsonRejection>,
) -> AppResult<Json<VehicleAssessment>> {
    let Json(input) = payload?;
    let record = input.into_record()?;
    let assessment = assess(state.estimator, &record)?;

    tracing::debug!(
        probability = assessment.failure_probability,
        health = assessment.health.overall,
        status = %assessment.status,
        "Vehicle assessed"
    );

    Ok(Json(assessment))
}
