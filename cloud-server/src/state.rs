//! Shared application state

use std::sync::Arc;

use autocare_core::logic::reporting::{self, ComponentFailures, FleetSummary};
use autocare_core::{generate, shared_estimator, FleetResult, TrainedEstimator};

use crate::config::Config;

/// Dashboard figures computed once at startup
#[derive(Debug)]
pub struct FleetReport {
    pub summary: FleetSummary,
    pub manufacturing: Vec<ComponentFailures>,
}

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub estimator: &'static TrainedEstimator,
    pub fleet: Arc<FleetReport>,
}

impl AppState {
    /// Train (or reuse) the shared estimator and precompute fleet figures
    pub fn build(config: Config) -> FleetResult<Self> {
        let estimator = shared_estimator(&config.estimator)?;

        let dataset = generate(config.estimator.fleet_seed, config.estimator.fleet_size)?;
        let fleet = FleetReport {
            summary: reporting::fleet_summary(estimator, &dataset)?,
            manufacturing: reporting::manufacturing_feedback(&dataset),
        };

        tracing::info!(
            "Fleet ready: {} vehicles, avg health {}%, {} predicted failures",
            fleet.summary.fleet_size,
            fleet.summary.average_health,
            fleet.summary.predicted_failures
        );

        Ok(Self {
            config,
            estimator,
            fleet: Arc::new(fleet),
        })
    }
}
