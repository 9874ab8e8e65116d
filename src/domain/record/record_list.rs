//! Per-session record collection.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    AttendanceType, EntityKind, NusnetId, Score, TaskmasterError,
};
use crate::domain::student::Student;

use super::StudentRecord;

/// Ordered records of one session, at most one per student identity.
///
/// # Invariants
///
/// - No two records share a `NusnetId`
/// - Order follows the roster order at the time the session was created
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<StudentRecord>", into = "Vec<StudentRecord>")]
pub struct StudentRecordList {
    records: Vec<StudentRecord>,
}

impl StudentRecordList {
    /// Builds one fresh record per student, in roster order.
    pub fn from_students<'a>(students: impl IntoIterator<Item = &'a Student>) -> Self {
        Self {
            records: students
                .into_iter()
                .map(|s| StudentRecord::new(s.nusnet_id().clone()))
                .collect(),
        }
    }

    /// Reconstitutes a collection from existing records.
    ///
    /// # Errors
    ///
    /// - `DuplicateEntity` if two records share an identity
    pub fn from_records(records: Vec<StudentRecord>) -> Result<Self, TaskmasterError> {
        for (i, record) in records.iter().enumerate() {
            if records[..i].iter().any(|r| r.nusnet_id() == record.nusnet_id()) {
                return Err(TaskmasterError::duplicate(
                    EntityKind::StudentRecord,
                    record.nusnet_id(),
                ));
            }
        }
        Ok(Self { records })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn get(&self, nusnet_id: &NusnetId) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.nusnet_id() == nusnet_id)
    }

    pub fn contains(&self, nusnet_id: &NusnetId) -> bool {
        self.get(nusnet_id).is_some()
    }

    pub fn as_slice(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StudentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the minimum score across all records, or `None` when empty.
    pub fn lowest_score(&self) -> Option<Score> {
        self.records.iter().map(StudentRecord::score).min()
    }

    /// Returns the records whose score equals `score`.
    pub fn records_with_score(&self, score: Score) -> impl Iterator<Item = &StudentRecord> {
        self.records.iter().filter(move |r| r.score() == score)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Sets the attendance of the record for `nusnet_id`.
    ///
    /// # Errors
    ///
    /// - `EntityNotFound` if no record exists for `nusnet_id`
    pub fn mark_by_identity(
        &mut self,
        nusnet_id: &NusnetId,
        attendance_type: AttendanceType,
    ) -> Result<(), TaskmasterError> {
        self.get_mut(nusnet_id)?.set_attendance_type(attendance_type);
        Ok(())
    }

    /// Sets the participation score of the record for `nusnet_id`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `score` is outside 0..=10
    /// - `EntityNotFound` if no record exists for `nusnet_id`
    pub fn score_by_identity(
        &mut self,
        nusnet_id: &NusnetId,
        score: i32,
    ) -> Result<(), TaskmasterError> {
        let score = Score::try_new(score)?;
        self.get_mut(nusnet_id)?.set_score(score);
        Ok(())
    }

    /// Resets every record to `NO_RECORD` with a zero score.
    pub fn clear_all(&mut self) {
        self.records.iter_mut().for_each(StudentRecord::clear);
    }

    /// Overwrites existing records with `replacements`, matched by identity.
    ///
    /// # Errors
    ///
    /// - `EntityNotFound` if any replacement has no matching record; nothing
    ///   is overwritten in that case
    pub fn replace_all(&mut self, replacements: &[StudentRecord]) -> Result<(), TaskmasterError> {
        if let Some(missing) = replacements.iter().find(|r| !self.contains(r.nusnet_id())) {
            return Err(TaskmasterError::not_found(
                EntityKind::StudentRecord,
                missing.nusnet_id(),
            ));
        }
        for replacement in replacements {
            if let Some(record) = self
                .records
                .iter_mut()
                .find(|r| r.nusnet_id() == replacement.nusnet_id())
            {
                *record = replacement.clone();
            }
        }
        Ok(())
    }

    /// Appends a fresh record unless one already exists for `nusnet_id`.
    pub(crate) fn ensure_record(&mut self, nusnet_id: &NusnetId) {
        if !self.contains(nusnet_id) {
            self.records.push(StudentRecord::new(nusnet_id.clone()));
        }
    }

    /// Moves the record of `from` to identity `to`, keeping its state.
    ///
    /// No-op when `from` has no record or `to` already has one.
    pub(crate) fn rekey(&mut self, from: &NusnetId, to: &NusnetId) {
        if from == to || self.contains(to) {
            return;
        }
        if let Some(record) = self.records.iter_mut().find(|r| r.nusnet_id() == from) {
            record.set_nusnet_id(to.clone());
        }
    }

    fn get_mut(&mut self, nusnet_id: &NusnetId) -> Result<&mut StudentRecord, TaskmasterError> {
        self.records
            .iter_mut()
            .find(|r| r.nusnet_id() == nusnet_id)
            .ok_or_else(|| TaskmasterError::not_found(EntityKind::StudentRecord, nusnet_id))
    }
}

impl TryFrom<Vec<StudentRecord>> for StudentRecordList {
    type Error = TaskmasterError;

    fn try_from(records: Vec<StudentRecord>) -> Result<Self, Self::Error> {
        Self::from_records(records)
    }
}

impl From<StudentRecordList> for Vec<StudentRecord> {
    fn from(list: StudentRecordList) -> Self {
        list.records
    }
}

impl<'a> IntoIterator for &'a StudentRecordList {
    type Item = &'a StudentRecord;
    type IntoIter = std::slice::Iter<'a, StudentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
