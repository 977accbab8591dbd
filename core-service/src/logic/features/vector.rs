//! Feature Vector - Core data structure for model input
//!
//! Wraps the six telemetry values in FEATURE_LAYOUT order together with the
//! layout version and hash. Construction rejects non-finite values, so every
//! `FeatureVector` is safe to hand to the forest.

use serde::{Deserialize, Serialize};

use crate::logic::error::{FleetError, FleetResult};
use super::layout::{layout_hash, FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Feature layout version
    pub version: u8,
    /// CRC32 hash of the feature layout
    pub layout_hash: u32,
    /// Feature values in order defined by FEATURE_LAYOUT
    pub values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Create from raw values with current version
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> FleetResult<Self> {
        if let Some((i, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(FleetError::InvalidInput(format!(
                "`{}` must be a finite number, got {}",
                FEATURE_LAYOUT[i], v
            )));
        }

        Ok(Self {
            version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            values,
        })
    }

    pub fn as_array(&self) -> &[f64; FEATURE_COUNT] {
        &self.values
    }
}
