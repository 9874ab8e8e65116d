//! Read-only snapshot exchanged with the storage collaborator.

use serde::{Deserialize, Serialize};

use crate::domain::session::Session;
use crate::domain::student::Student;

/// Read access to a roster and its session history.
///
/// Implemented by the aggregate root itself and by `TaskmasterSnapshot`, so
/// either can seed `Taskmaster::reset_data`.
pub trait ReadOnlyTaskmaster {
    /// Students in roster order.
    fn students(&self) -> &[Student];

    /// Sessions in creation order.
    fn sessions(&self) -> &[Session];
}

/// Persisted shape of a Taskmaster: ordered students and ordered sessions.
///
/// Storage adapters are expected to have validated the format; uniqueness
/// is checked again when the snapshot is loaded into a `Taskmaster`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskmasterSnapshot {
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub sessions: Vec<Session>,
}

impl TaskmasterSnapshot {
    pub fn new(students: Vec<Student>, sessions: Vec<Session>) -> Self {
        Self { students, sessions }
    }

    /// Copies the contents of any read-only source.
    pub fn of(source: &impl ReadOnlyTaskmaster) -> Self {
        Self {
            students: source.students().to_vec(),
            sessions: source.sessions().to_vec(),
        }
    }
}

impl ReadOnlyTaskmaster for TaskmasterSnapshot {
    fn students(&self) -> &[Student] {
        &self.students
    }

    fn sessions(&self) -> &[Session] {
        &self.sessions
    }
}
