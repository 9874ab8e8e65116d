//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

use super::SessionName;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

/// Stable error codes, one per failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    DuplicateEntity,
    EntityNotFound,
    SessionNotFound,
    NoActiveSession,
    InvalidArgument,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::DuplicateEntity => "DUPLICATE_ENTITY",
            ErrorCode::EntityNotFound => "ENTITY_NOT_FOUND",
            ErrorCode::SessionNotFound => "SESSION_NOT_FOUND",
            ErrorCode::NoActiveSession => "NO_ACTIVE_SESSION",
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
        };
        write!(f, "{}", s)
    }
}

/// The kind of entity an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Student,
    Session,
    StudentRecord,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Student => "student",
            EntityKind::Session => "session",
            EntityKind::StudentRecord => "student record",
        };
        write!(f, "{}", s)
    }
}

/// Errors surfaced by the roster, session and record operations.
///
/// Every variant is recoverable; a failed operation leaves state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskmasterError {
    #[error("Duplicate {entity}: {key}")]
    DuplicateEntity { entity: EntityKind, key: String },

    #[error("{entity} not found: {key}")]
    EntityNotFound { entity: EntityKind, key: String },

    #[error("Session not found: {0}")]
    SessionNotFound(SessionName),

    #[error("No session is currently selected")]
    NoActiveSession,

    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument { field: String, message: String },
}

impl TaskmasterError {
    pub fn duplicate(entity: EntityKind, key: impl ToString) -> Self {
        TaskmasterError::DuplicateEntity {
            entity,
            key: key.to_string(),
        }
    }

    pub fn not_found(entity: EntityKind, key: impl ToString) -> Self {
        TaskmasterError::EntityNotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        TaskmasterError::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            TaskmasterError::DuplicateEntity { .. } => ErrorCode::DuplicateEntity,
            TaskmasterError::EntityNotFound { .. } => ErrorCode::EntityNotFound,
            TaskmasterError::SessionNotFound(_) => ErrorCode::SessionNotFound,
            TaskmasterError::NoActiveSession => ErrorCode::NoActiveSession,
            TaskmasterError::InvalidArgument { .. } => ErrorCode::InvalidArgument,
        }
    }

    /// Returns true for a per-item lookup miss, the only failure that
    /// best-effort bulk operations skip.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TaskmasterError::EntityNotFound { .. })
    }
}

impl From<ValidationError> for TaskmasterError {
    fn from(err: ValidationError) -> Self {
        TaskmasterError::InvalidArgument {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}
