//! Parameter Health Scorer
//!
//! Two-tier per-parameter scores for display: 90 inside the healthy band,
//! 50 outside it. Independent of the forest. The two tiers cannot tell a
//! mild deviation from an extreme one.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::logic::fleet::TelemetryRecord;

/// Score for a value inside its healthy band
pub const IN_BAND_SCORE: u8 = 90;

/// Score for a value outside its healthy band
pub const OUT_OF_BAND_SCORE: u8 = 50;

// ============================================================================
// PARAMETERS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    EngineTemp,
    BatteryVoltage,
    BrakeWear,
    OilPressure,
    CoolantLevel,
    Rpm,
}

/// Inclusive healthy band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub low: f64,
    pub high: f64,
}

impl Parameter {
    pub const ALL: [Parameter; 6] = [
        Parameter::EngineTemp,
        Parameter::BatteryVoltage,
        Parameter::BrakeWear,
        Parameter::OilPressure,
        Parameter::CoolantLevel,
        Parameter::Rpm,
    ];

    pub fn bounds(&self) -> Bounds {
        let (low, high) = match self {
            Parameter::EngineTemp => (70.0, 95.0),
            Parameter::BatteryVoltage => (11.8, 13.2),
            Parameter::BrakeWear => (0.0, 70.0),
            Parameter::OilPressure => (30.0, 55.0),
            Parameter::CoolantLevel => (65.0, 100.0),
            Parameter::Rpm => (700.0, 4000.0),
        };
        Bounds { low, high }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Parameter::EngineTemp => "Engine Temp",
            Parameter::BatteryVoltage => "Battery Voltage",
            Parameter::BrakeWear => "Brake Wear",
            Parameter::OilPressure => "Oil Pressure",
            Parameter::CoolantLevel => "Coolant Level",
            Parameter::Rpm => "RPM",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Parameter::EngineTemp => "°C",
            Parameter::BatteryVoltage => "V",
            Parameter::BrakeWear | Parameter::CoolantLevel => "%",
            Parameter::OilPressure => "psi",
            Parameter::Rpm => "rpm",
        }
    }

    pub fn value(&self, record: &TelemetryRecord) -> f64 {
        match self {
            Parameter::EngineTemp => record.engine_temp,
            Parameter::BatteryVoltage => record.battery_voltage,
            Parameter::BrakeWear => record.brake_wear as f64,
            Parameter::OilPressure => record.oil_pressure,
            Parameter::CoolantLevel => record.coolant_level,
            Parameter::Rpm => record.rpm as f64,
        }
    }
}

// ============================================================================
// SCORING
// ============================================================================

/// 90 when `low <= value <= high`, 50 otherwise
pub fn score_parameter(value: f64, low: f64, high: f64) -> u8 {
    if low <= value && value <= high {
        IN_BAND_SCORE
    } else {
        OUT_OF_BAND_SCORE
    }
}

/// Truncated integer mean of the scores; 0 when there are none
pub fn overall_health<'a, I>(scores: I) -> u8
where
    I: IntoIterator<Item = &'a u8>,
{
    let (sum, count) = scores
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), &s| (sum + s as u64, count + 1));

    if count == 0 {
        0
    } else {
        (sum / count).min(100) as u8
    }
}

/// Per-parameter scores plus their aggregate, computed per request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthScoreBoard {
    pub scores: BTreeMap<Parameter, u8>,
    pub overall: u8,
}

impl HealthScoreBoard {
    pub fn score(record: &TelemetryRecord) -> Self {
        let scores: BTreeMap<Parameter, u8> = Parameter::ALL
            .iter()
            .map(|p| {
                let b = p.bounds();
                (*p, score_parameter(p.value(record), b.low, b.high))
            })
            .collect();
        let overall = overall_health(scores.values());

        Self { scores, overall }
    }

    pub fn get(&self, parameter: Parameter) -> Option<u8> {
        self.scores.get(&parameter).copied()
    }

    /// Parameters outside their healthy band
    pub fn out_of_band(&self) -> Vec<Parameter> {
        self.scores
            .iter()
            .filter(|(_, &s)| s == OUT_OF_BAND_SCORE)
            .map(|(p, _)| *p)
            .collect()
    }
}
