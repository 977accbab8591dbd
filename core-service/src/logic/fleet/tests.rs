use super::export::{to_jsonl, ExportRow};
use super::{generate, FleetDataset, TelemetryRecord};
use crate::logic::error::FleetError;
use crate::logic::features::{layout_hash, FEATURE_VERSION};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_generate_is_deterministic() {
    let a = generate(42, 500).unwrap();
    let b = generate(42, 500).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 500);
    assert_eq!(a.seed(), Some(42));
}

#[test]
fn test_different_seeds_differ() {
    let a = generate(42, 50).unwrap();
    let b = generate(43, 50).unwrap();
    assert_ne!(a.records(), b.records());
}

#[test]
fn test_generate_is_prefix_stable() {
    let short = generate(42, 100).unwrap();
    let long = generate(42, 500).unwrap();
    assert_eq!(short.records(), &long.records()[..100]);
}

#[test]
fn test_zero_size_is_invalid_configuration() {
    assert!(matches!(generate(42, 0), Err(FleetError::InvalidConfiguration(_))));
}

#[test]
fn test_field_ranges() {
    let fleet = generate(42, 500).unwrap();
    for r in fleet.records() {
        let t = &r.telemetry;
        assert!((10..90).contains(&t.brake_wear));
        assert!((700..4500).contains(&t.rpm));
        assert!(t.coolant_level >= 60.0 && t.coolant_level < 100.0);
        assert!(t.engine_temp.is_finite());
        assert!(t.battery_voltage.is_finite());
        assert!(t.oil_pressure.is_finite());
    }
}

#[test]
fn test_distribution_means_are_plausible() {
    let fleet = generate(42, 500).unwrap();
    let n = fleet.len() as f64;
    let mean = |f: fn(&TelemetryRecord) -> f64| {
        fleet.records().iter().map(|r| f(&r.telemetry)).sum::<f64>() / n
    };

    // Standard error of the mean is sd/sqrt(500) ≈ 0.045*sd; allow ~4.5 SE
    assert!((mean(|t| t.engine_temp) - 85.0).abs() < 2.0);
    assert!((mean(|t| t.battery_voltage) - 12.2).abs() < 0.12);
    assert!((mean(|t| t.oil_pressure) - 40.0).abs() < 1.6);
    assert!((mean(|t| t.coolant_level) - 80.0).abs() < 2.5);
}

#[test]
fn test_labels_follow_rule() {
    let fleet = generate(42, 500).unwrap();
    for r in fleet.records() {
        assert_eq!(r.failure, r.telemetry.failure_label());
    }
    // Roughly 60% of the reference fleet trips at least one condition
    assert!(fleet.has_both_classes());
    assert!(fleet.failure_rate() > 0.4 && fleet.failure_rate() < 0.8);
}

#[test]
fn test_from_records_labels_each_record() {
    let healthy = TelemetryRecord::reference_vehicle();
    let failing = TelemetryRecord { brake_wear: 95, ..healthy };
    let dataset = FleetDataset::from_records(vec![healthy, failing]);

    assert_eq!(dataset.failure_count(), 1);
    assert_eq!(dataset.seed(), None);
    assert!(dataset.has_both_classes());
}

#[test]
fn test_export_writes_one_row_per_record() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fleet.jsonl");
    let fleet = generate(42, 25).unwrap();

    let written = to_jsonl(&fleet, &path).unwrap();
    assert_eq!(written, 25);

    let content = fs::read_to_string(&path).unwrap();
    let rows: Vec<ExportRow> = content
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(rows.len(), 25);
    assert_eq!(rows[0].feature_version, FEATURE_VERSION);
    assert_eq!(rows[0].layout_hash, layout_hash());
    assert_eq!(rows[3].telemetry, fleet.records()[3].telemetry);
    assert_eq!(rows[3].failure, fleet.records()[3].failure);
}

#[test]
fn test_export_row_is_flat() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("one.jsonl");
    let dataset = FleetDataset::from_records(vec![TelemetryRecord::reference_vehicle()]);
    to_jsonl(&dataset, &path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(fs::read_to_string(&path).unwrap().trim()).unwrap();
    assert_eq!(value["rpm"], 2500);
    assert_eq!(value["failure"], false);
}
