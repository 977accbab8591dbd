//! Estimator status handler

use axum::Json;

use autocare_core::logic::model::inference::{self, EngineStatus};

pub async fn status() -> Json<EngineStatus> {
    Json(inference::get_status())
}
