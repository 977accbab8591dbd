//! AutoCare Dashboard Backend Server
//!
//! JSON API over the fleet health core.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 AUTOCARE DASHBOARD                       │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌──────────────┐  ┌───────────────────┐  │
//! │  │  API      │  │  Assessment  │  │  Fleet Report     │  │
//! │  │  (Axum)   │  │  + Schedule  │  │  (startup, cached)│  │
//! │  └─────┬─────┘  └──────┬───────┘  └─────────┬─────────┘  │
//! │        └───────────────┼────────────────────┘            │
//! │                        ▼                                 │
//! │              ┌──────────────────┐                        │
//! │              │ Shared estimator │                        │
//! │              │ (trained once)   │                        │
//! │              └──────────────────┘                        │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;
mod models;
mod state;

#[cfg(test)]
mod tests;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{AppError, AppResult};
pub use state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "autocare_dashboard=debug,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env()?;

    tracing::info!("AutoCare Dashboard starting ({})...", config.environment);
    if !config.is_production() {
        tracing::debug!("Estimator config: {:?}", config.estimator);
    }

    // Training is CPU-bound; keep it off the async workers
    let port = config.port;
    let state = tokio::task::spawn_blocking(move || AppState::build(config)).await??;

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Fleet dashboard
        .route("/api/v1/fleet/summary", get(handlers::fleet::summary))
        .route("/api/v1/fleet/manufacturing", get(handlers::fleet::manufacturing))

        // Vehicle health
        .route("/api/v1/vehicle/default", get(handlers::vehicle::default_vehicle))
        .route("/api/v1/vehicle/assess", post(handlers::vehicle::assess_vehicle))

        // Scheduling
        .route("/api/v1/schedule", post(handlers::scheduling::schedule))

        // Estimator status
        .route("/api/v1/engine/status", get(handlers::engine::status));

    Router::new()
        .route("/health", get(handlers::health::check))
        .merge(api_routes)
        .fallback(handlers::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
