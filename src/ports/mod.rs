//! Ports - Interfaces between the model and the outside world.
//!
//! - `SnapshotStorage` - loads and saves the whole model
//! - `ModelObserver` - receives change notifications with read-only access

mod model_observer;
mod snapshot_storage;

pub use model_observer::ModelObserver;
pub use snapshot_storage::{SnapshotStorage, SnapshotStorageError};
