//! Failure Rule
//!
//! Hand-defined ground truth used to label the synthetic fleet.
//! A vehicle is failing when ANY of the five conditions holds.

use serde::{Deserialize, Serialize};

use super::record::TelemetryRecord;

// ============================================================================
// THRESHOLDS
// ============================================================================

/// Engine temperature above this (°C) = failure
pub const ENGINE_TEMP_MAX: f64 = 95.0;

/// Battery voltage below this (V) = failure
pub const BATTERY_VOLTAGE_MIN: f64 = 11.8;

/// Brake wear above this (%) = failure
pub const BRAKE_WEAR_MAX: u32 = 70;

/// Oil pressure below this (psi) = failure
pub const OIL_PRESSURE_MIN: f64 = 30.0;

/// Coolant level below this (%) = failure
pub const COOLANT_LEVEL_MIN: f64 = 65.0;

// ============================================================================
// FAILURE CAUSES
// ============================================================================

/// Individual rule condition that marks a vehicle as failing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCause {
    EngineOverheat,
    LowBattery,
    BrakeWear,
    LowOilPressure,
    LowCoolant,
}

impl FailureCause {
    pub const ALL: [FailureCause; 5] = [
        FailureCause::EngineOverheat,
        FailureCause::LowBattery,
        FailureCause::BrakeWear,
        FailureCause::LowOilPressure,
        FailureCause::LowCoolant,
    ];

    pub fn applies(&self, r: &TelemetryRecord) -> bool {
        match self {
            FailureCause::EngineOverheat => r.engine_temp > ENGINE_TEMP_MAX,
            FailureCause::LowBattery => r.battery_voltage < BATTERY_VOLTAGE_MIN,
            FailureCause::BrakeWear => r.brake_wear > BRAKE_WEAR_MAX,
            FailureCause::LowOilPressure => r.oil_pressure < OIL_PRESSURE_MIN,
            FailureCause::LowCoolant => r.coolant_level < COOLANT_LEVEL_MIN,
        }
    }

    /// Component group reported on the manufacturing feedback panel
    pub fn component(&self) -> Component {
        match self {
            FailureCause::EngineOverheat | FailureCause::LowOilPressure => Component::Engine,
            FailureCause::LowBattery => Component::Battery,
            FailureCause::BrakeWear => Component::Brakes,
            FailureCause::LowCoolant => Component::Cooling,
        }
    }
}

/// Manufacturing component groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Brakes,
    Battery,
    Cooling,
    Engine,
}

impl Component {
    pub const ALL: [Component; 4] = [
        Component::Brakes,
        Component::Battery,
        Component::Cooling,
        Component::Engine,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Component::Brakes => "Brakes",
            Component::Battery => "Battery",
            Component::Cooling => "Cooling",
            Component::Engine => "Engine",
        }
    }
}

// ============================================================================
// RULE EVALUATION
// ============================================================================

/// All conditions that hold for a record, in rule order
pub fn failure_causes(r: &TelemetryRecord) -> Vec<FailureCause> {
    FailureCause::ALL
        .iter()
        .copied()
        .filter(|cause| cause.applies(r))
        .collect()
}

/// Ground-truth label: logical OR of every condition
pub fn is_failure(r: &TelemetryRecord) -> bool {
    FailureCause::ALL.iter().any(|cause| cause.applies(r))
}
