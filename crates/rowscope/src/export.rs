//! Snapshot export: write a fetched row set to disk with provenance
//! metadata.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::error::{Result, RowscopeError};
use crate::fetch::RetrievalConfig;
use crate::item::DatasetItem;

/// Provenance record written alongside a snapshot file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    /// Dataset identifier.
    pub dataset: String,
    /// Config the rows came from.
    pub config: String,
    /// Split the rows came from.
    pub split: String,
    /// Number of rows in the snapshot.
    pub row_count: usize,
    /// SHA-256 hash of the snapshot file contents.
    pub hash: String,
    /// Snapshot file size in bytes.
    pub size_bytes: u64,
    /// When the fetch completed.
    pub fetched_at: DateTime<Utc>,
}

impl SnapshotMetadata {
    /// Build metadata for a snapshot file already written to `path`.
    pub fn for_file(
        retrieval: &RetrievalConfig,
        row_count: usize,
        path: impl AsRef<Path>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read(path).map_err(|e| RowscopeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("{:x}", hasher.finalize());

        Ok(Self {
            dataset: retrieval.dataset.clone(),
            config: retrieval.config.clone(),
            split: retrieval.split.clone(),
            row_count,
            hash,
            size_bytes: contents.len() as u64,
            fetched_at: Utc::now(),
        })
    }

    /// Write the metadata as pretty JSON next to the snapshot.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| RowscopeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

/// Write items as a pretty-printed JSON array.
pub fn write_json(path: impl AsRef<Path>, items: &[DatasetItem]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| RowscopeError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, items)?;
    writer.flush().map_err(|e| RowscopeError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

/// Write items as CSV.
///
/// The header is the field order of the first item; rows are assumed uniform
/// (the dataset API contract). Scalars are written in their display form,
/// composite values as compact JSON text, missing fields as empty cells.
pub fn write_csv(path: impl AsRef<Path>, items: &[DatasetItem]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)?;

    let Some(first) = items.first() else {
        writer.flush().map_err(|e| RowscopeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        return Ok(());
    };

    let header: Vec<&str> = first.field_names().collect();
    writer.write_record(&header)?;

    for item in items {
        let record: Vec<String> = header
            .iter()
            .map(|field| csv_cell(item.get(field)))
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush().map_err(|e| RowscopeError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

/// Render one CSV cell.
fn csv_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(composite) => composite.to_string(),
    }
}
