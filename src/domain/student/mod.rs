//! Student domain module.
//!
//! The roster: `Student` entries keyed by NUSNET id and the
//! `UniqueStudentList` registry that keeps them unique and ordered.

mod registry;
mod student;

pub use registry::UniqueStudentList;
pub use student::{Name, Student, Tag};
