//! AttendanceType enum for a student's presence in a session.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Attendance state of one student within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceType {
    Present,
    Absent,
    #[default]
    NoRecord,
}

impl AttendanceType {
    /// Returns true if attendance has been taken for the student.
    pub fn is_recorded(&self) -> bool {
        !matches!(self, AttendanceType::NoRecord)
    }
}

impl fmt::Display for AttendanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AttendanceType::Present => "PRESENT",
            AttendanceType::Absent => "ABSENT",
            AttendanceType::NoRecord => "NO_RECORD",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for AttendanceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "present" => Ok(AttendanceType::Present),
            "absent" => Ok(AttendanceType::Absent),
            "no_record" => Ok(AttendanceType::NoRecord),
            other => Err(ValidationError::invalid_format(
                "attendance_type",
                format!("'{}' is not one of present, absent, no_record", other),
            )),
        }
    }
}
