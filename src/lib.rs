//! Taskmaster - classroom session tracking.
//!
//! Keeps a roster of students, a history of teaching sessions and, per
//! session, one attendance and participation record for each student.
//! Filtered read-only views over the model are exposed to display-side
//! observers.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
