//! Health Module - Display-oriented parameter scoring

pub mod scorer;

pub use scorer::{overall_health, score_parameter, Bounds, HealthScoreBoard, Parameter};
