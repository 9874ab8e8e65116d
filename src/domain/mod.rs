//! Domain layer containing the classroom model and its invariants.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `student` - Students and the unique student registry
//! - `record` - Per-session attendance and participation records
//! - `session` - Teaching sessions and the session registry
//! - `taskmaster` - Aggregate root, active-session state and change events
//! - `view` - Predicate-filtered read views over the aggregate

pub mod foundation;
pub mod record;
pub mod session;
pub mod student;
pub mod taskmaster;
pub mod view;
