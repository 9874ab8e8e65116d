//! Session domain module.
//!
//! Teaching sessions and their registry. Each `Session` owns the records of
//! the students enrolled when it was created; the `SessionList` keeps
//! sessions unique by name in creation order.

mod registry;
mod session;

pub use registry::SessionList;
pub use session::Session;
