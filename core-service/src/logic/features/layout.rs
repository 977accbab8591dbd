//! Feature Layout
//!
//! Position of each telemetry field in the forest's input vector. Trees
//! address features by index, so any reordering, addition or removal must
//! bump FEATURE_VERSION; the layout hash then changes with it and a forest
//! trained on the old layout refuses the new vectors.

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

/// Current feature layout version
pub const FEATURE_VERSION: u8 = 1;

/// Total number of features
pub const FEATURE_COUNT: usize = 6;

/// Feature names in vector order
pub const FEATURE_LAYOUT: [&str; FEATURE_COUNT] = [
    "engine_temp",     // °C
    "battery_voltage", // V
    "brake_wear",      // % worn
    "oil_pressure",    // psi
    "coolant_level",   // % full
    "rpm",
];

/// CRC32 over the version byte and the NUL-separated feature names
pub fn layout_hash() -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(&[FEATURE_VERSION]);
    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]);
    }
    hasher.finalize()
}

/// Layout a forest was trained against, as reported by the status endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub feature_names: Vec<String>,
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: layout_hash(),
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// True when a vector stamped with `version`/`hash` can be scored
    pub fn accepts(&self, version: u8, hash: u32) -> bool {
        self.version == version && self.hash == hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_hash_is_stable() {
        assert_eq!(layout_hash(), layout_hash());
        assert_ne!(layout_hash(), 0);
    }

    #[test]
    fn test_current_layout() {
        let info = LayoutInfo::current();
        assert_eq!(info.feature_names.len(), FEATURE_COUNT);
        assert_eq!(info.feature_names[2], "brake_wear");
        assert!(info.accepts(FEATURE_VERSION, layout_hash()));
    }

    #[test]
    fn test_stale_stamp_not_accepted() {
        let info = LayoutInfo::current();
        assert!(!info.accepts(FEATURE_VERSION + 1, layout_hash()));
        assert!(!info.accepts(FEATURE_VERSION, layout_hash() ^ 1));
    }
}
