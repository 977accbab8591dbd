//! Fleet dashboard handlers

use axum::{extract::State, Json};

use autocare_core::logic::reporting::{ComponentFailures, FleetSummary};

use crate::AppState;

/// Fleet command dashboard figures
pub async fn summary(State(state): State<AppState>) -> Json<FleetSummary> {
    Json(state.fleet.summary.clone())
}

/// Failure causes per component group
pub async fn manufacturing(State(state): State<AppState>) -> Json<Vec<ComponentFailures>> {
    Json(state.fleet.manufacturing.clone())
}
