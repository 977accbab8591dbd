use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::logic::features::{layout_hash, FEATURE_VERSION};
use super::dataset::FleetDataset;
use super::record::TelemetryRecord;

/// One exported line
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExportRow {
    pub feature_version: u8,
    pub layout_hash: u32,
    #[serde(flatten)]
    pub telemetry: TelemetryRecord,
    pub failure: bool,
}

/// Write the dataset to a JSONL file (truncating any existing file).
/// Returns the number of rows written.
pub fn to_jsonl(dataset: &FleetDataset, target_path: impl AsRef<Path>) -> io::Result<usize> {
    let target_path = target_path.as_ref();
    let mut out = BufWriter::new(File::create(target_path)?);
    let hash = layout_hash();

    for record in dataset.records() {
        let row = ExportRow {
            feature_version: FEATURE_VERSION,
            layout_hash: hash,
            telemetry: record.telemetry,
            failure: record.failure,
        };
        let json = serde_json::to_string(&row)?;
        writeln!(out, "{}", json)?;
    }

    out.flush()?;
    log::info!("Exported {} fleet records to {}", dataset.len(), target_path.display());
    Ok(dataset.len())
}
