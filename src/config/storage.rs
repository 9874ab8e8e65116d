//! Snapshot storage configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

/// File extensions the storage adapter can read and write
const SUPPORTED_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// Where the model snapshot is kept
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the snapshot file
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Snapshot file name; the extension selects JSON or YAML
    #[serde(default = "default_snapshot_file")]
    pub snapshot_file: String,
}

impl StorageConfig {
    /// Full path of the snapshot file
    pub fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join(&self.snapshot_file)
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.snapshot_file.trim().is_empty() {
            return Err(ValidationError::MissingRequired("storage.snapshot_file"));
        }
        let extension = Path::new(&self.snapshot_file)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension {
            Some(ext) if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
            _ => Err(ValidationError::UnsupportedSnapshotFormat(
                self.snapshot_file.clone(),
            )),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            snapshot_file: default_snapshot_file(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_snapshot_file() -> String {
    "taskmaster.json".to_string()
}
