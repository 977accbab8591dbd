//! Features Module - Telemetry feature schema
//!
//! Fixed layout of the six telemetry values fed to the forest.

pub mod layout;
pub mod vector;

// Re-export common types
pub use layout::{layout_hash, LayoutInfo, FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION};
pub use vector::FeatureVector;
