//! File-based Snapshot Storage Adapter
//!
//! Stores the whole model as one JSON or YAML document. The format is
//! chosen from the file extension.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::session::SessionList;
use crate::domain::student::UniqueStudentList;
use crate::domain::taskmaster::TaskmasterSnapshot;
use crate::ports::{SnapshotStorage, SnapshotStorageError};

/// On-disk encoding of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    /// Picks the format for `path` from its extension.
    ///
    /// # Errors
    /// Returns `SnapshotStorageError::UnsupportedFormat` for anything other
    /// than `.json`, `.yaml` or `.yml`
    pub fn from_path(path: &Path) -> Result<Self, SnapshotStorageError> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(SnapshotStorageError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }

    fn encode(self, snapshot: &TaskmasterSnapshot) -> Result<String, SnapshotStorageError> {
        match self {
            Self::Json => serde_json::to_string_pretty(snapshot)
                .map_err(|e| SnapshotStorageError::SerializationFailed(e.to_string())),
            Self::Yaml => serde_yaml::to_string(snapshot)
                .map_err(|e| SnapshotStorageError::SerializationFailed(e.to_string())),
        }
    }

    fn decode(self, content: &str) -> Result<TaskmasterSnapshot, SnapshotStorageError> {
        match self {
            Self::Json => serde_json::from_str(content)
                .map_err(|e| SnapshotStorageError::DeserializationFailed(e.to_string())),
            Self::Yaml => serde_yaml::from_str(content)
                .map_err(|e| SnapshotStorageError::DeserializationFailed(e.to_string())),
        }
    }
}

/// File-based storage for the model snapshot
#[derive(Debug, Clone)]
pub struct FileSnapshotStorage {
    data_dir: PathBuf,
    file_path: PathBuf,
    format: SnapshotFormat,
}

impl FileSnapshotStorage {
    /// Create a storage writing `file_name` under `data_dir`
    ///
    /// # Errors
    /// Returns `SnapshotStorageError::UnsupportedFormat` if the extension
    /// is not recognised
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileSnapshotStorage::new("./data", "taskmaster.json")?;
    /// ```
    pub fn new<P: AsRef<Path>>(data_dir: P, file_name: &str) -> Result<Self, SnapshotStorageError> {
        let data_dir = data_dir.as_ref().to_path_buf();
        let file_path = data_dir.join(file_name);
        let format = SnapshotFormat::from_path(&file_path)?;
        Ok(Self {
            data_dir,
            file_path,
            format,
        })
    }

    /// Path of the snapshot file
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn format(&self) -> SnapshotFormat {
        self.format
    }

    /// Rejects snapshots that repeat a student identity or session name
    fn validate(snapshot: &TaskmasterSnapshot) -> Result<(), SnapshotStorageError> {
        UniqueStudentList::from_students(snapshot.students.clone())
            .map_err(|e| SnapshotStorageError::InvalidSnapshot(e.to_string()))?;
        SessionList::from_sessions(snapshot.sessions.clone())
            .map_err(|e| SnapshotStorageError::InvalidSnapshot(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl SnapshotStorage for FileSnapshotStorage {
    async fn load(&self) -> Result<Option<TaskmasterSnapshot>, SnapshotStorageError> {
        if !self.exists().await? {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.file_path).await?;
        let snapshot = self.format.decode(&content)?;
        Self::validate(&snapshot)?;

        Ok(Some(snapshot))
    }

    async fn save(&self, snapshot: &TaskmasterSnapshot) -> Result<(), SnapshotStorageError> {
        fs::create_dir_all(&self.data_dir).await?;

        let content = self.format.encode(snapshot)?;
        fs::write(&self.file_path, content).await?;

        Ok(())
    }

    async fn exists(&self) -> Result<bool, SnapshotStorageError> {
        Ok(fs::try_exists(&self.file_path).await?)
    }
}
