//! Response models

pub mod schedule;

pub use schedule::*;
