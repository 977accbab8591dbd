use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::logic::error::{FleetError, FleetResult};
use crate::logic::features::{FeatureVector, FEATURE_COUNT};
use super::rules;

/// One vehicle's instantaneous sensor snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    /// °C
    pub engine_temp: f64,
    /// V
    pub battery_voltage: f64,
    /// % worn
    pub brake_wear: u32,
    /// psi
    pub oil_pressure: f64,
    /// % full
    pub coolant_level: f64,
    pub rpm: u32,
}

impl TelemetryRecord {
    /// Dashboard defaults for a freshly opened vehicle view
    pub fn reference_vehicle() -> Self {
        Self {
            engine_temp: 92.0,
            battery_voltage: 12.0,
            brake_wear: 55,
            oil_pressure: 38.0,
            coolant_level: 75.0,
            rpm: 2500,
        }
    }

    /// Values in FEATURE_LAYOUT order
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.engine_temp,
            self.battery_voltage,
            self.brake_wear as f64,
            self.oil_pressure,
            self.coolant_level,
            self.rpm as f64,
        ]
    }

    /// Validated feature vector; rejects NaN and infinities
    pub fn features(&self) -> FleetResult<FeatureVector> {
        FeatureVector::from_values(self.to_array())
    }

    /// Ground-truth failure label (training supervision only)
    pub fn failure_label(&self) -> bool {
        rules::is_failure(self)
    }
}

/// A record paired with its derived failure label
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelledRecord {
    pub telemetry: TelemetryRecord,
    pub failure: bool,
}

impl LabelledRecord {
    pub fn new(telemetry: TelemetryRecord) -> Self {
        Self {
            failure: telemetry.failure_label(),
            telemetry,
        }
    }
}

// ============================================================================
// LOOSE INPUT (external callers)
// ============================================================================

/// Telemetry as supplied by an external caller.
///
/// Every field is optional and untyped so a missing or non-numeric value can
/// be reported as `InvalidInput` instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelemetryInput {
    pub engine_temp: Option<Value>,
    pub battery_voltage: Option<Value>,
    pub brake_wear: Option<Value>,
    pub oil_pressure: Option<Value>,
    pub coolant_level: Option<Value>,
    pub rpm: Option<Value>,
}

impl TelemetryInput {
    pub fn into_record(self) -> FleetResult<TelemetryRecord> {
        let record = TelemetryRecord {
            engine_temp: real("engine_temp", self.engine_temp)?,
            battery_voltage: real("battery_voltage", self.battery_voltage)?,
            brake_wear: count("brake_wear", self.brake_wear)?,
            oil_pressure: real("oil_pressure", self.oil_pressure)?,
            coolant_level: real("coolant_level", self.coolant_level)?,
            rpm: count("rpm", self.rpm)?,
        };
        record.features()?;
        Ok(record)
    }
}

impl From<TelemetryRecord> for TelemetryInput {
    fn from(record: TelemetryRecord) -> Self {
        Self {
            engine_temp: Some(record.engine_temp.into()),
            battery_voltage: Some(record.battery_voltage.into()),
            brake_wear: Some(record.brake_wear.into()),
            oil_pressure: Some(record.oil_pressure.into()),
            coolant_level: Some(record.coolant_level.into()),
            rpm: Some(record.rpm.into()),
        }
    }
}

fn real(field: &str, value: Option<Value>) -> FleetResult<f64> {
    match value {
        None | Some(Value::Null) => Err(FleetError::InvalidInput(format!("missing field `{field}`"))),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| FleetError::InvalidInput(format!("`{field}` is not representable as f64"))),
        Some(other) => Err(FleetError::InvalidInput(format!(
            "`{field}` must be numeric, got {other}"
        ))),
    }
}

fn count(field: &str, value: Option<Value>) -> FleetResult<u32> {
    let v = real(field, value)?;
    if v.fract() != 0.0 || v < 0.0 || v > u32::MAX as f64 {
        return Err(FleetError::InvalidInput(format!(
            "`{field}` must be a non-negative integer, got {v}"
        )));
    }
    Ok(v as u32)
}
