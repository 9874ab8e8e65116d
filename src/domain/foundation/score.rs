//! Participation score value object (0-10 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Class participation score between 0 and 10 inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Score(u8);

impl Score {
    /// Lowest score, also the default for a fresh record.
    pub const MIN: Self = Self(0);

    /// Highest score.
    pub const MAX: Self = Self(10);

    /// Creates a Score, returning error if out of range.
    pub fn try_new(value: i32) -> Result<Self, ValidationError> {
        if !(i32::from(Self::MIN.0)..=i32::from(Self::MAX.0)).contains(&value) {
            return Err(ValidationError::out_of_range(
                "score",
                i32::from(Self::MIN.0),
                i32::from(Self::MAX.0),
                value,
            ));
        }
        // Range checked above, so the narrowing cannot truncate.
        Ok(Self(value as u8))
    }

    /// Returns the raw score.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i32> for Score {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Score> for i32 {
    fn from(score: Score) -> Self {
        i32::from(score.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
