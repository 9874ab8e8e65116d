//! Snapshot Storage Port - Interface for persisting the whole model.
//!
//! The model is loaded once at start-up and saved as a single
//! `TaskmasterSnapshot` (ordered students, ordered sessions). Adapters own
//! the on-disk format; the domain never performs I/O.

use async_trait::async_trait;

use crate::domain::taskmaster::TaskmasterSnapshot;

/// Errors that can occur during snapshot storage operations
#[derive(Debug, thiserror::Error)]
pub enum SnapshotStorageError {
    #[error("Failed to serialize snapshot: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize snapshot: {0}")]
    DeserializationFailed(String),

    #[error("Unsupported snapshot format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Snapshot violates model invariants: {0}")]
    InvalidSnapshot(String),
}

impl From<std::io::Error> for SnapshotStorageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Port for loading and saving the model snapshot
#[async_trait]
pub trait SnapshotStorage: Send + Sync {
    /// Load the stored snapshot
    ///
    /// # Returns
    /// `None` when nothing has been saved yet
    ///
    /// # Errors
    /// Returns `SnapshotStorageError::DeserializationFailed` if the stored
    /// data cannot be read back as a snapshot
    async fn load(&self) -> Result<Option<TaskmasterSnapshot>, SnapshotStorageError>;

    /// Save a snapshot, replacing any previous one
    ///
    /// # Errors
    /// Returns `SnapshotStorageError` if serialization or the write fails
    async fn save(&self, snapshot: &TaskmasterSnapshot) -> Result<(), SnapshotStorageError>;

    /// Check whether a snapshot has been saved
    async fn exists(&self) -> Result<bool, SnapshotStorageError>;
}
