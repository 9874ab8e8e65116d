//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Number of digits following the leading `E` of a NUSNET id.
const NUSNET_ID_DIGITS: usize = 7;

/// Unique external key of a student, e.g. `E0123456`.
///
/// The leading letter is normalised to upper case, so `e0123456` and
/// `E0123456` are the same identity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NusnetId(String);

impl NusnetId {
    /// Creates a NusnetId, returning error if the format is wrong.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("nusnet_id"));
        }
        if !Self::is_valid(trimmed) {
            return Err(ValidationError::invalid_format(
                "nusnet_id",
                format!(
                    "'{}' must be 'E' followed by {} digits",
                    trimmed, NUSNET_ID_DIGITS
                ),
            ));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Returns true if `candidate` is a well-formed NUSNET id.
    pub fn is_valid(candidate: &str) -> bool {
        let mut chars = candidate.chars();
        matches!(chars.next(), Some('e' | 'E'))
            && candidate.len() == NUSNET_ID_DIGITS + 1
            && chars.all(|c| c.is_ascii_digit())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NusnetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NusnetId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for NusnetId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NusnetId> for String {
    fn from(id: NusnetId) -> Self {
        id.0
    }
}

/// Unique name of a teaching session.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionName(String);

impl SessionName {
    /// Maximum length for a session name.
    pub const MAX_LENGTH: usize = 100;

    /// Creates a SessionName, returning error if blank or too long.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("session_name"));
        }
        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(ValidationError::invalid_format(
                "session_name",
                format!("must be {} characters or less", Self::MAX_LENGTH),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Wraps a literal known to be a valid name.
    pub(crate) fn from_static(name: &'static str) -> Self {
        debug_assert!(!name.trim().is_empty() && name.len() <= Self::MAX_LENGTH);
        Self(name.to_string())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SessionName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SessionName> for String {
    fn from(name: SessionName) -> Self {
        name.0
    }
}
