//! A single student's attendance and participation within one session.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{AttendanceType, NusnetId, Score};

/// One student's state within one session.
///
/// The record refers to its student by identity only; it does not own
/// or borrow the `Student`, so it outlives removal from the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    nusnet_id: NusnetId,
    #[serde(default)]
    attendance_type: AttendanceType,
    #[serde(default)]
    score: Score,
}

impl StudentRecord {
    /// Creates a record with no attendance taken and a zero score.
    pub fn new(nusnet_id: NusnetId) -> Self {
        Self {
            nusnet_id,
            attendance_type: AttendanceType::NoRecord,
            score: Score::MIN,
        }
    }

    /// Reconstitutes a record with explicit state.
    pub fn with_state(nusnet_id: NusnetId, attendance_type: AttendanceType, score: Score) -> Self {
        Self {
            nusnet_id,
            attendance_type,
            score,
        }
    }

    pub fn nusnet_id(&self) -> &NusnetId {
        &self.nusnet_id
    }

    pub fn attendance_type(&self) -> AttendanceType {
        self.attendance_type
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub(crate) fn set_attendance_type(&mut self, attendance_type: AttendanceType) {
        self.attendance_type = attendance_type;
    }

    pub(crate) fn set_score(&mut self, score: Score) {
        self.score = score;
    }

    pub(crate) fn set_nusnet_id(&mut self, nusnet_id: NusnetId) {
        self.nusnet_id = nusnet_id;
    }

    /// Resets to `NO_RECORD` with a zero score.
    pub(crate) fn clear(&mut self) {
        self.attendance_type = AttendanceType::NoRecord;
        self.score = Score::MIN;
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.nusnet_id, self.attendance_type, self.score)
    }
}
