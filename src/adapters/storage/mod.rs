//! Storage Adapters
//!
//! Implementations of the SnapshotStorage port.
//!
//! ## Available Adapters
//!
//! - **FileSnapshotStorage** - Stores the snapshot as a JSON or YAML file
//! - **InMemorySnapshotStorage** - Stores the snapshot in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileSnapshotStorage, InMemorySnapshotStorage};
//!
//! // Production: file-based storage
//! let storage = FileSnapshotStorage::new("./data", "taskmaster.json")?;
//!
//! // Testing: in-memory storage
//! let storage = InMemorySnapshotStorage::new();
//! ```

mod file_snapshot_storage;
mod in_memory_snapshot_storage;

pub use file_snapshot_storage::{FileSnapshotStorage, SnapshotFormat};
pub use in_memory_snapshot_storage::InMemorySnapshotStorage;
