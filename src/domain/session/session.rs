//! Session entity.
//!
//! A session is one teaching occurrence: a unique name, the moment it was
//! created, and the attendance records of the students enrolled at that time.
//!
//! # Ownership
//!
//! A session owns its `StudentRecordList` exclusively. Records reference
//! students by NUSNET id; they do NOT own the students.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{
    AttendanceType, NusnetId, Score, SessionName, TaskmasterError, Timestamp,
};
use crate::domain::record::{StudentRecord, StudentRecordList};
use crate::domain::student::Student;

/// A named, timestamped container of student records.
///
/// # Invariants
///
/// - `name` and `created_at` never change after construction
/// - Registry lookups compare sessions by `name` only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique key of this session.
    name: SessionName,

    /// When the session was created.
    created_at: Timestamp,

    /// Records of this session (owned).
    #[serde(default)]
    records: StudentRecordList,
}

impl Session {
    /// Creates a session with one fresh record per student in `roster`.
    pub fn from_roster<'a>(
        name: SessionName,
        created_at: Timestamp,
        roster: impl IntoIterator<Item = &'a Student>,
    ) -> Self {
        Self {
            name,
            created_at,
            records: StudentRecordList::from_students(roster),
        }
    }

    /// Reconstitutes a session from persistence.
    pub fn reconstitute(
        name: SessionName,
        created_at: Timestamp,
        records: StudentRecordList,
    ) -> Self {
        Self {
            name,
            created_at,
            records,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the session name.
    pub fn name(&self) -> &SessionName {
        &self.name
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns the records of this session.
    pub fn records(&self) -> &StudentRecordList {
        &self.records
    }

    /// Returns true if both sessions share a name.
    pub fn is_same_session(&self, other: &Session) -> bool {
        self.name == other.name
    }

    /// Returns the minimum participation score, or `None` without records.
    pub fn lowest_score(&self) -> Option<Score> {
        self.records.lowest_score()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Marks the attendance of one student.
    ///
    /// # Errors
    ///
    /// - `EntityNotFound` if the student has no record in this session
    pub fn mark_student_attendance(
        &mut self,
        nusnet_id: &NusnetId,
        attendance_type: AttendanceType,
    ) -> Result<(), TaskmasterError> {
        self.records.mark_by_identity(nusnet_id, attendance_type)
    }

    /// Scores the participation of one student.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `score` is outside 0..=10
    /// - `EntityNotFound` if the student has no record in this session
    pub fn score_student(
        &mut self,
        nusnet_id: &NusnetId,
        score: i32,
    ) -> Result<(), TaskmasterError> {
        self.records.score_by_identity(nusnet_id, score)
    }

    /// Resets every record of this session.
    pub fn clear_attendance(&mut self) {
        self.records.clear_all();
    }

    /// Overwrites records by identity.
    ///
    /// # Errors
    ///
    /// - `EntityNotFound` if any record has no counterpart in this session
    pub fn update_student_records(
        &mut self,
        records: &[StudentRecord],
    ) -> Result<(), TaskmasterError> {
        self.records.replace_all(records)
    }

    pub(crate) fn records_mut(&mut self) -> &mut StudentRecordList {
        &mut self.records
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::student::Name;

    fn id(raw: &str) -> NusnetId {
        NusnetId::new(raw).unwrap()
    }

    fn roster() -> Vec<Student> {
        vec![
            Student::new(id("E0000111"), Name::new("Alice").unwrap(), []),
            Student::new(id("E0000222"), Name::new("Bob").unwrap(), []),
        ]
    }

    fn test_session(name: &str) -> Session {
        Session::from_roster(SessionName::new(name).unwrap(), Timestamp::now(), &roster())
    }

    #[test]
    fn new_session_has_record_per_student() {
        let session = test_session("Tutorial 1");
        assert_eq!(session.records().len(), 2);
        assert!(session
            .records()
            .iter()
            .all(|r| r.attendance_type() == AttendanceType::NoRecord && r.score() == Score::MIN));
    }

    #[test]
    fn same_session_compares_name_only() {
        let a = test_session("Tutorial 1");
        let mut b = test_session("Tutorial 1");
        b.mark_student_attendance(&id("E0000111"), AttendanceType::Present)
            .unwrap();
        assert!(a.is_same_session(&b));
        assert_ne!(a, b);
        assert!(!a.is_same_session(&test_session("Tutorial 2")));
    }

    #[test]
    fn mark_and_score_delegate_to_records() {
        let mut session = test_session("Lab");
        session
            .mark_student_attendance(&id("E0000222"), AttendanceType::Absent)
            .unwrap();
        session.score_student(&id("E0000111"), 9).unwrap();

        let bob = session.records().get(&id("E0000222")).unwrap();
        assert_eq!(bob.attendance_type(), AttendanceType::Absent);
        assert_eq!(session.lowest_score(), Some(Score::MIN));
    }

    #[test]
    fn score_out_of_range_is_invalid_argument() {
        let mut session = test_session("Lab");
        let err = session.score_student(&id("E0000111"), 42).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
    }

    #[test]
    fn clear_attendance_resets_records() {
        let mut session = test_session("Lab");
        session
            .mark_student_attendance(&id("E0000111"), AttendanceType::Present)
            .unwrap();
        session.clear_attendance();
        let cleared = Session::reconstitute(
            session.name().clone(),
            *session.created_at(),
            StudentRecordList::from_students(&roster()),
        );
        assert_eq!(session, cleared);
    }

    #[test]
    fn serializes_with_records() {
        let session = test_session("Tutorial 1");
        let json = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }
}
