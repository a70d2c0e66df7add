//! Persistence for display configurations - save/load JSON files.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::{Result, RowscopeError};

use super::display::DisplayConfig;

impl DisplayConfig {
    /// Save the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let file = File::create(path).map_err(|e| {
            RowscopeError::Persistence(format!(
                "Failed to create file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self).map_err(|e| {
            RowscopeError::Persistence(format!("Failed to serialize display config: {}", e))
        })?;

        Ok(())
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| {
            RowscopeError::Persistence(format!(
                "Failed to open file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let reader = BufReader::new(file);
        let config: DisplayConfig = serde_json::from_reader(reader).map_err(|e| {
            RowscopeError::Persistence(format!(
                "Failed to parse display config '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::super::builtin::builtin_config;
    use super::*;

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gdpval.json");

        let config = builtin_config("openai/gdpval").unwrap();
        config.save(&path).unwrap();

        let loaded = DisplayConfig::load(&path).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_missing_file_is_persistence_error() {
        let result = DisplayConfig::load("/nonexistent/config.json");
        assert!(matches!(result, Err(RowscopeError::Persistence(_))));
    }
}
