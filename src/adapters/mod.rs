//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the model to the outside world:
//! - `storage` - Snapshot persistence (file, in-memory)
//! - `observers` - Model observers (logging, recording)

pub mod observers;
pub mod storage;

pub use observers::{LoggingObserver, ObservedEvent, RecordingObserver};
pub use storage::{FileSnapshotStorage, InMemorySnapshotStorage, SnapshotFormat};
