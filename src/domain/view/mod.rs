//! Derived, read-only views over the model.
//!
//! Student and session views always read the live registries. The record
//! view is bound to one session at a time and is rebound explicitly when
//! the active session changes.

mod filtered;
mod predicate;

pub use filtered::{FilteredView, RecordView};
pub use predicate::{NameContainsKeywordsPredicate, Predicate, ScoreEqualsPredicate, ShowAll};

use crate::domain::record::StudentRecord;
use crate::domain::session::Session;
use crate::domain::student::Student;
use crate::domain::taskmaster::ActiveSession;

/// Read surface of the model handed to display-side consumers.
pub trait ReadOnlyModel {
    /// Students accepted by the current student predicate.
    fn filtered_students(&self) -> Vec<&Student>;

    /// Sessions accepted by the current session predicate.
    fn filtered_sessions(&self) -> Vec<&Session>;

    /// Records of the active session accepted by the record predicate.
    /// Empty when no session is active.
    fn filtered_records(&self) -> Vec<&StudentRecord>;

    fn current_session(&self) -> &ActiveSession;
}
