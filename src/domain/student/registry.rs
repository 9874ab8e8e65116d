//! Student registry: an insertion-ordered roster, unique by NUSNET id.

use serde::Serialize;

use crate::domain::foundation::{EntityKind, NusnetId, TaskmasterError};

use super::Student;

/// Ordered collection of students with no two sharing an identity.
///
/// # Invariants
///
/// - No two students share a `NusnetId`
/// - Iteration order is insertion order; `replace` keeps the position
///
/// Lookups for `remove` and `replace` match the target by full equality,
/// so a caller holding a stale copy of a student gets `EntityNotFound`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UniqueStudentList {
    students: Vec<Student>,
}

impl UniqueStudentList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from `students`.
    ///
    /// # Errors
    ///
    /// - `DuplicateEntity` if two students share an identity
    pub fn from_students(students: Vec<Student>) -> Result<Self, TaskmasterError> {
        let mut list = Self::new();
        list.set_students(students)?;
        Ok(list)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns true if a student with this identity is registered.
    pub fn contains(&self, nusnet_id: &NusnetId) -> bool {
        self.students.iter().any(|s| s.nusnet_id() == nusnet_id)
    }

    /// Returns true if a student with the same identity as `student` is registered.
    pub fn contains_student(&self, student: &Student) -> bool {
        self.contains(student.nusnet_id())
    }

    pub fn get(&self, nusnet_id: &NusnetId) -> Option<&Student> {
        self.students.iter().find(|s| s.nusnet_id() == nusnet_id)
    }

    pub fn as_slice(&self) -> &[Student] {
        &self.students
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a student.
    ///
    /// # Errors
    ///
    /// - `DuplicateEntity` if the identity is already registered
    pub fn add(&mut self, student: Student) -> Result<(), TaskmasterError> {
        if self.contains_student(&student) {
            return Err(TaskmasterError::duplicate(
                EntityKind::Student,
                student.nusnet_id(),
            ));
        }
        self.students.push(student);
        Ok(())
    }

    /// Removes `target`, returning it.
    ///
    /// # Errors
    ///
    /// - `EntityNotFound` if `target` is not in the registry
    pub fn remove(&mut self, target: &Student) -> Result<Student, TaskmasterError> {
        let index = self.position_of(target)?;
        Ok(self.students.remove(index))
    }

    /// Replaces `target` with `replacement` in place.
    ///
    /// # Errors
    ///
    /// - `EntityNotFound` if `target` is not in the registry
    /// - `DuplicateEntity` if `replacement` collides with a different student
    pub fn replace(
        &mut self,
        target: &Student,
        replacement: Student,
    ) -> Result<(), TaskmasterError> {
        let index = self.position_of(target)?;
        if !target.is_same_student(&replacement) && self.contains_student(&replacement) {
            return Err(TaskmasterError::duplicate(
                EntityKind::Student,
                replacement.nusnet_id(),
            ));
        }
        self.students[index] = replacement;
        Ok(())
    }

    /// Replaces the whole roster.
    ///
    /// # Errors
    ///
    /// - `DuplicateEntity` if `students` contains two with the same identity;
    ///   the registry is left unchanged
    pub fn set_students(&mut self, students: Vec<Student>) -> Result<(), TaskmasterError> {
        for (i, student) in students.iter().enumerate() {
            if students[..i].iter().any(|s| s.is_same_student(student)) {
                return Err(TaskmasterError::duplicate(
                    EntityKind::Student,
                    student.nusnet_id(),
                ));
            }
        }
        self.students = students;
        Ok(())
    }

    fn position_of(&self, target: &Student) -> Result<usize, TaskmasterError> {
        self.students
            .iter()
            .position(|s| s == target)
            .ok_or_else(|| TaskmasterError::not_found(EntityKind::Student, target.nusnet_id()))
    }
}

impl<'a> IntoIterator for &'a UniqueStudentList {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.students.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::student::{Name, Tag};

    fn student(id: &str, name: &str) -> Student {
        Student::new(NusnetId::new(id).unwrap(), Name::new(name).unwrap(), [])
    }

    fn alice() -> Student {
        student("E0000111", "Alice")
    }

    fn bob() -> Student {
        student("E0000222", "Bob")
    }

    // Add tests

    #[test]
    fn add_keeps_insertion_order() {
        let mut list = UniqueStudentList::new();
        list.add(bob()).unwrap();
        list.add(alice()).unwrap();
        let names: Vec<_> = list.iter().map(|s| s.name().as_str()).collect();
        assert_eq!(names, vec!["Bob", "Alice"]);
    }

    #[test]
    fn add_duplicate_identity_fails_and_leaves_list_unchanged() {
        let mut list = UniqueStudentList::new();
        list.add(alice()).unwrap();
        let err = list.add(student("E0000111", "Someone Else")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::DuplicateEntity);
        assert_eq!(list.as_slice(), &[alice()]);
    }

    // Contains tests

    #[test]
    fn contains_matches_by_identity() {
        let mut list = UniqueStudentList::new();
        list.add(alice()).unwrap();
        let tagged = Student::new(
            alice().nusnet_id().clone(),
            Name::new("Alice").unwrap(),
            [Tag::new("late").unwrap()],
        );
        assert!(list.contains_student(&tagged));
        assert!(list.contains(alice().nusnet_id()));
        assert!(!list.contains(bob().nusnet_id()));
    }

    // Remove tests

    #[test]
    fn remove_existing_student() {
        let mut list = UniqueStudentList::from_students(vec![alice(), bob()]).unwrap();
        let removed = list.remove(&alice()).unwrap();
        assert_eq!(removed, alice());
        assert_eq!(list.as_slice(), &[bob()]);
    }

    #[test]
    fn remove_missing_student_fails() {
        let mut list = UniqueStudentList::new();
        let err = list.remove(&alice()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::EntityNotFound);
    }

    // Replace tests

    #[test]
    fn replace_keeps_position() {
        let mut list = UniqueStudentList::from_students(vec![alice(), bob()]).unwrap();
        let carol = student("E0000333", "Carol");
        list.replace(&alice(), carol.clone()).unwrap();
        assert_eq!(list.as_slice(), &[carol, bob()]);
    }

    #[test]
    fn replace_with_same_identity_is_allowed() {
        let mut list = UniqueStudentList::from_students(vec![alice()]).unwrap();
        let renamed = student("E0000111", "Alicia");
        list.replace(&alice(), renamed.clone()).unwrap();
        assert_eq!(list.as_slice(), &[renamed]);
    }

    #[test]
    fn replace_colliding_with_other_student_fails() {
        let mut list = UniqueStudentList::from_students(vec![alice(), bob()]).unwrap();
        let err = list
            .replace(&alice(), student("E0000222", "Alice"))
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::DuplicateEntity);
        assert_eq!(list.as_slice(), &[alice(), bob()]);
    }

    #[test]
    fn replace_missing_target_fails() {
        let mut list = UniqueStudentList::from_students(vec![bob()]).unwrap();
        let err = list.replace(&alice(), alice()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::EntityNotFound);
    }

    // Bulk replacement tests

    #[test]
    fn set_students_rejects_duplicates_atomically() {
        let mut list = UniqueStudentList::from_students(vec![bob()]).unwrap();
        let err = list
            .set_students(vec![alice(), student("E0000111", "Alice Again")])
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::DuplicateEntity);
        assert_eq!(list.as_slice(), &[bob()]);
    }
}
