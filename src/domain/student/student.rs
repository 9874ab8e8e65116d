//! Student entity and its value objects.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::domain::foundation::{NusnetId, ValidationError};

/// A student's display name: letters, digits and spaces, not blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if !trimmed.chars().all(|c| c.is_alphanumeric() || c == ' ') {
            return Err(ValidationError::invalid_format(
                "name",
                "may only contain letters, digits and spaces",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

/// A single alphanumeric label attached to a student.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn new(tag: impl Into<String>) -> Result<Self, ValidationError> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(ValidationError::empty_field("tag"));
        }
        if !tag.chars().all(char::is_alphanumeric) {
            return Err(ValidationError::invalid_format("tag", "must be alphanumeric"));
        }
        Ok(Self(tag))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

impl TryFrom<String> for Tag {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

/// A roster entry.
///
/// # Identity
///
/// Two students are the *same student* when their NUSNET ids match
/// (`is_same_student`); `==` compares every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    nusnet_id: NusnetId,
    name: Name,
    #[serde(default)]
    tags: BTreeSet<Tag>,
}

impl Student {
    pub fn new(nusnet_id: NusnetId, name: Name, tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            nusnet_id,
            name,
            tags: tags.into_iter().collect(),
        }
    }

    /// Returns the student's identity.
    pub fn nusnet_id(&self) -> &NusnetId {
        &self.nusnet_id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Returns true if both students share an identity.
    pub fn is_same_student(&self, other: &Student) -> bool {
        self.nusnet_id == other.nusnet_id
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.nusnet_id)?;
        for tag in &self.tags {
            write!(f, " {}", tag)?;
        }
        Ok(())
    }
}
