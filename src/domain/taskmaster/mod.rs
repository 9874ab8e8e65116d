//! Taskmaster domain module - the aggregate root.
//!
//! Composes the student registry and the session history, tracks which
//! session is active, and is the only place either may be mutated from.
//!
//! # Events
//!
//! `ModelEvent` values describe completed changes; the application layer
//! delivers them to observers.

mod active_session;
mod aggregate;
mod events;
mod snapshot;

pub use active_session::ActiveSession;
pub use aggregate::{SessionDefaults, Taskmaster};
pub use events::ModelEvent;
pub use snapshot::{ReadOnlyTaskmaster, TaskmasterSnapshot};
