//! Autonomous scheduling handler

use axum::{extract::{rejection::JsonRejection, State}, Json};

use autocare_core::logic::scheduling::plan_service;
use autocare_core::{assess, TelemetryInput};

use crate::models::ScheduleResponse;
use crate::{AppResult, AppState};

/// Assess a vehicle and book a service slot if it needs one
pub async fn schedule(
    State(state): State<AppState>,
    payload: Result<Json<TelemetryInput>, JsonRejection>,
) -> AppResult<Json<ScheduleResponse>> {
    let Json(input) = payload?;
    let record = input.into_record()?;
    let assessment = assess(state.estimator, &record)?;

    let plan = plan_service(
        assessment.failure_probability,
        chrono::Utc::now(),
        &state.config.scheduling,
    )?;
    if plan.is_scheduled() {
        tracing::info!("{}", plan.summary());
    }

    Ok(Json(ScheduleResponse::new(assessment, plan)))
}
