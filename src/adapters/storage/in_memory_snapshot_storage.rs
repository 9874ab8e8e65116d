//! In-Memory Snapshot Storage Adapter
//!
//! Keeps the last saved snapshot in memory. Useful for testing and
//! development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::taskmaster::TaskmasterSnapshot;
use crate::ports::{SnapshotStorage, SnapshotStorageError};

/// In-memory storage for the model snapshot
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStorage {
    snapshot: Arc<RwLock<Option<TaskmasterSnapshot>>>,
    saves: Arc<RwLock<usize>>,
}

impl InMemorySnapshotStorage {
    /// Create an empty storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage that already holds `snapshot`
    pub fn with_snapshot(snapshot: TaskmasterSnapshot) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(Some(snapshot))),
            saves: Arc::new(RwLock::new(0)),
        }
    }

    /// Drop the stored snapshot (useful for tests)
    pub async fn clear(&self) {
        *self.snapshot.write().await = None;
    }

    /// Number of successful saves
    pub async fn save_count(&self) -> usize {
        *self.saves.read().await
    }
}

#[async_trait]
impl SnapshotStorage for InMemorySnapshotStorage {
    async fn load(&self) -> Result<Option<TaskmasterSnapshot>, SnapshotStorageError> {
        Ok(self.snapshot.read().await.clone())
    }

    async fn save(&self, snapshot: &TaskmasterSnapshot) -> Result<(), SnapshotStorageError> {
        *self.snapshot.write().await = Some(snapshot.clone());
        *self.saves.write().await += 1;
        Ok(())
    }

    async fn exists(&self) -> Result<bool, SnapshotStorageError> {
        Ok(self.snapshot.read().await.is_some())
    }
}
