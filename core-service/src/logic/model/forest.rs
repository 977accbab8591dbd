//! Failure Risk Estimator - Random Forest
//!
//! Bagged CART trees trained once on the synthetic fleet. Training draws its
//! randomness from a seeded `StdRng`; inference has none.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::logic::config::EstimatorConfig;
use crate::logic::error::{FleetError, FleetResult};
use crate::logic::features::{FeatureVector, LayoutInfo, FEATURE_COUNT};
use crate::logic::fleet::{FleetDataset, TelemetryRecord};
use super::tree::{DecisionTree, TrainingSet, TreeParams};

/// Model metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_type: String,
    pub n_trees: usize,
    pub max_depth: usize,
    pub max_features: usize,
    /// Feature layout the trees index into
    pub layout: LayoutInfo,
    pub training_samples: usize,
    pub training_failure_rate: f64,
    pub training_seed: u64,
    pub trained_at: chrono::DateTime<chrono::Utc>,
}

/// Immutable trained forest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainedEstimator {
    trees: Vec<DecisionTree>,
    metadata: ModelMetadata,
}

/// `sqrt(n_features)` candidate features per split, at least one
pub fn default_max_features() -> usize {
    ((FEATURE_COUNT as f64).sqrt() as usize).max(1)
}

/// Train a forest on `dataset`.
///
/// Rejects an empty dataset and one with a single label class.
pub fn train(dataset: &FleetDataset, config: &EstimatorConfig) -> FleetResult<TrainedEstimator> {
    config.validate()?;

    if dataset.is_empty() {
        return Err(FleetError::Training("dataset is empty".to_string()));
    }
    if !dataset.has_both_classes() {
        return Err(FleetError::Training(format!(
            "dataset has a single label class ({} of {} failing)",
            dataset.failure_count(),
            dataset.len()
        )));
    }

    let start = Instant::now();

    let mut rows = Vec::with_capacity(dataset.len());
    let mut labels = Vec::with_capacity(dataset.len());
    for record in dataset.records() {
        rows.push(record.telemetry.features()?.values);
        labels.push(record.failure);
    }
    let data = TrainingSet { rows: &rows, labels: &labels };

    let params = TreeParams {
        max_depth: config.max_depth,
        min_samples_split: config.min_samples_split,
        max_features: default_max_features(),
    };

    let mut master = StdRng::seed_from_u64(config.training_seed);
    let n = rows.len();
    let trees: Vec<DecisionTree> = (0..config.n_trees)
        .map(|_| {
            // Independent stream per tree
            let mut rng = StdRng::seed_from_u64(master.gen());
            let mut bootstrap: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();
            DecisionTree::fit(&data, &mut bootstrap, &params, &mut rng)
        })
        .collect();

    let metadata = ModelMetadata {
        model_type: "random_forest".to_string(),
        n_trees: trees.len(),
        max_depth: params.max_depth,
        max_features: params.max_features,
        layout: LayoutInfo::current(),
        training_samples: n,
        training_failure_rate: dataset.failure_rate(),
        training_seed: config.training_seed,
        trained_at: chrono::Utc::now(),
    };

    log::info!(
        "Trained {} trees (max_depth={}) on {} samples, failure rate {:.1}% in {:?}",
        metadata.n_trees,
        metadata.max_depth,
        n,
        metadata.training_failure_rate * 100.0,
        start.elapsed()
    );

    Ok(TrainedEstimator { trees, metadata })
}

impl TrainedEstimator {
    /// Failure probability for one vehicle, in [0, 1]
    pub fn predict(&self, record: &TelemetryRecord) -> FleetResult<f64> {
        let features = record.features()?;
        self.predict_features(&features)
    }

    /// Mean leaf failure fraction over all trees.
    ///
    /// The vector must carry the layout stamp the forest was trained with.
    pub fn predict_features(&self, features: &FeatureVector) -> FleetResult<f64> {
        if !self.metadata.layout.accepts(features.version, features.layout_hash) {
            return Err(FleetError::InvalidInput(format!(
                "feature layout v{} ({:08x}) does not match model layout v{} ({:08x})",
                features.version,
                features.layout_hash,
                self.metadata.layout.version,
                self.metadata.layout.hash
            )));
        }

        let sum: f64 = self.trees.iter().map(|t| t.predict(features.as_array())).sum();
        Ok((sum / self.trees.len() as f64).clamp(0.0, 1.0))
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    pub fn trees(&self) -> &[DecisionTree] {
        &self.trees
    }
}
