//! HTTP handlers

pub mod health;
pub mod engine;
pub mod fleet;
pub mod vehicle;
pub mod scheduling;

use crate::AppError;

/// Fallback for unknown routes
pub async fn not_found(uri: axum::http::Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
