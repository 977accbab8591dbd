//! Inference Engine - Shared estimator and scoring statistics
//!
//! The forest is trained lazily on first access and kept for the rest of the
//! process. `OnceCell::get_or_try_init` makes concurrent first callers block
//! on a single training run; a failed run leaves the cell empty.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::logic::config::EstimatorConfig;
use crate::logic::error::FleetResult;
use crate::logic::fleet::{self, TelemetryRecord};
use super::forest::{self, ModelMetadata, TrainedEstimator};

// ============================================================================
// STATE
// ============================================================================

static ESTIMATOR: OnceCell<TrainedEstimator> = OnceCell::new();

/// Latency stats
static LATENCY_SUM: AtomicU64 = AtomicU64::new(0);
static INFERENCE_COUNT: AtomicU64 = AtomicU64::new(0);
static REJECTED_COUNT: AtomicU64 = AtomicU64::new(0);

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Engine Status for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStatus {
    pub model_loaded: bool,
    pub model: Option<ModelMetadata>,
    pub avg_latency_us: f64,
    pub inference_count: u64,
    pub rejected_count: u64,
}

// ============================================================================
// SHARED ESTIMATOR
// ============================================================================

/// Generate the reference fleet and train on it
pub fn train_reference(config: &EstimatorConfig) -> FleetResult<TrainedEstimator> {
    let dataset = fleet::generate(config.fleet_seed, config.fleet_size)?;
    forest::train(&dataset, config)
}

/// Process-wide estimator, trained on first call with `config`.
///
/// Later calls return the cached forest and ignore `config`.
pub fn shared_estimator(config: &EstimatorConfig) -> FleetResult<&'static TrainedEstimator> {
    init_once(&ESTIMATOR, config)
}

/// Train into `cell` unless it is already filled
pub(super) fn init_once<'a>(
    cell: &'a OnceCell<TrainedEstimator>,
    config: &EstimatorConfig,
) -> FleetResult<&'a TrainedEstimator> {
    cell.get_or_try_init(|| {
        log::info!(
            "Training failure-risk estimator (fleet seed {}, {} vehicles)",
            config.fleet_seed,
            config.fleet_size
        );
        train_reference(config)
    })
}

pub fn is_model_loaded() -> bool {
    ESTIMATOR.get().is_some()
}

// ============================================================================
// PREDICTION
// ============================================================================

/// Score one record and record latency statistics
pub fn predict(estimator: &TrainedEstimator, record: &TelemetryRecord) -> FleetResult<f64> {
    let start = Instant::now();

    match estimator.predict(record) {
        Ok(probability) => {
            let elapsed = start.elapsed().as_micros() as u64;
            LATENCY_SUM.fetch_add(elapsed, Ordering::Relaxed);
            INFERENCE_COUNT.fetch_add(1, Ordering::Relaxed);
            log::debug!("Failure probability {:.3} in {}us", probability, elapsed);
            Ok(probability)
        }
        Err(e) => {
            REJECTED_COUNT.fetch_add(1, Ordering::Relaxed);
            log::debug!("Rejected scoring request: {}", e);
            Err(e)
        }
    }
}

pub fn get_status() -> EngineStatus {
    let sum = LATENCY_SUM.load(Ordering::Relaxed);
    let count = INFERENCE_COUNT.load(Ordering::Relaxed);
    let avg = if count > 0 { sum as f64 / count as f64 } else { 0.0 };

    EngineStatus {
        model_loaded: is_model_loaded(),
        model: ESTIMATOR.get().map(|e| e.metadata().clone()),
        avg_latency_us: avg,
        inference_count: count,
        rejected_count: REJECTED_COUNT.load(Ordering::Relaxed),
    }
}
