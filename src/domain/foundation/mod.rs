//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Taskmaster domain.

mod attendance_type;
mod errors;
mod ids;
mod score;
mod timestamp;

pub use attendance_type::AttendanceType;
pub use errors::{EntityKind, ErrorCode, TaskmasterError, ValidationError};
pub use ids::{NusnetId, SessionName};
pub use score::Score;
pub use timestamp::Timestamp;
