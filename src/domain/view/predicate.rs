//! Predicates that select what a filtered view exposes.

use std::fmt;

use crate::domain::foundation::Score;
use crate::domain::record::StudentRecord;
use crate::domain::student::Student;

/// A test applied to every item a view reads from its source.
pub trait Predicate<T>: Send + Sync {
    fn test(&self, item: &T) -> bool;
}

impl<T, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn test(&self, item: &T) -> bool {
        self(item)
    }
}

/// Accepts every item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShowAll;

impl<T> Predicate<T> for ShowAll {
    fn test(&self, _item: &T) -> bool {
        true
    }
}

/// Accepts records whose participation score equals the given score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEqualsPredicate(pub Score);

impl Predicate<StudentRecord> for ScoreEqualsPredicate {
    fn test(&self, record: &StudentRecord) -> bool {
        record.score() == self.0
    }
}

/// Accepts students whose name contains any keyword as a whole word,
/// ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeywordsPredicate {
    keywords: Vec<String>,
}

impl NameContainsKeywordsPredicate {
    pub fn new<S: AsRef<str>>(keywords: impl IntoIterator<Item = S>) -> Self {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }
}

impl Predicate<Student> for NameContainsKeywordsPredicate {
    fn test(&self, student: &Student) -> bool {
        let name = student.name().as_str().to_lowercase();
        let words: Vec<&str> = name.split_whitespace().collect();
        self.keywords.iter().any(|k| words.contains(&k.as_str()))
    }
}

impl fmt::Display for NameContainsKeywordsPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keywords.join(" "))
    }
}
