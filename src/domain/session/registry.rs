//! Session registry: append-only history of sessions, unique by name.

use crate::domain::foundation::{EntityKind, SessionName, TaskmasterError};

use super::Session;

/// Ordered collection of sessions with no two sharing a name.
///
/// There is no single-session removal: session history is an audit trail.
/// Only a full `set_sessions` replacement (snapshot load) discards sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionList {
    sessions: Vec<Session>,
}

impl SessionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from `sessions`.
    ///
    /// # Errors
    ///
    /// - `DuplicateEntity` if two sessions share a name
    pub fn from_sessions(sessions: Vec<Session>) -> Result<Self, TaskmasterError> {
        let mut list = Self::new();
        list.set_sessions(sessions)?;
        Ok(list)
    }

    /// Returns the session called `name`.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if no session has that name
    pub fn get(&self, name: &SessionName) -> Result<&Session, TaskmasterError> {
        self.sessions
            .iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| TaskmasterError::SessionNotFound(name.clone()))
    }

    pub(crate) fn get_mut(&mut self, name: &SessionName) -> Result<&mut Session, TaskmasterError> {
        self.sessions
            .iter_mut()
            .find(|s| s.name() == name)
            .ok_or_else(|| TaskmasterError::SessionNotFound(name.clone()))
    }

    /// Returns true if a session called `name` exists.
    pub fn contains(&self, name: &SessionName) -> bool {
        self.sessions.iter().any(|s| s.name() == name)
    }

    /// Returns true if a session with the same name as `session` exists.
    pub fn contains_session(&self, session: &Session) -> bool {
        self.contains(session.name())
    }

    /// Appends a session.
    ///
    /// # Errors
    ///
    /// - `DuplicateEntity` if the name is taken
    pub fn add(&mut self, session: Session) -> Result<(), TaskmasterError> {
        if self.contains_session(&session) {
            return Err(TaskmasterError::duplicate(EntityKind::Session, session.name()));
        }
        self.sessions.push(session);
        Ok(())
    }

    /// Replaces the whole history.
    ///
    /// # Errors
    ///
    /// - `DuplicateEntity` if two sessions share a name; nothing changes
    pub fn set_sessions(&mut self, sessions: Vec<Session>) -> Result<(), TaskmasterError> {
        for (i, session) in sessions.iter().enumerate() {
            if sessions[..i].iter().any(|s| s.is_same_session(session)) {
                return Err(TaskmasterError::duplicate(EntityKind::Session, session.name()));
            }
        }
        self.sessions = sessions;
        Ok(())
    }

    pub fn as_slice(&self) -> &[Session] {
        &self.sessions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Session> {
        self.sessions.iter()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl<'a> IntoIterator for &'a SessionList {
    type Item = &'a Session;
    type IntoIter = std::slice::Iter<'a, Session>;

    fn into_iter(self) -> Self::IntoIter {
        self.sessions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, Timestamp};
    use crate::domain::record::StudentRecordList;

    fn session(name: &str) -> Session {
        Session::reconstitute(
            SessionName::new(name).unwrap(),
            Timestamp::now(),
            StudentRecordList::default(),
        )
    }

    fn name(raw: &str) -> SessionName {
        SessionName::new(raw).unwrap()
    }

    #[test]
    fn add_then_get_by_name() {
        let mut list = SessionList::new();
        list.add(session("Tutorial 1")).unwrap();
        assert_eq!(list.get(&name("Tutorial 1")).unwrap().name(), &name("Tutorial 1"));
    }

    #[test]
    fn add_duplicate_name_fails() {
        let mut list = SessionList::new();
        list.add(session("Tutorial 1")).unwrap();
        let err = list.add(session("Tutorial 1")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::DuplicateEntity);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn get_missing_fails_with_session_not_found() {
        let list = SessionList::new();
        let err = list.get(&name("Nope")).unwrap_err();
        assert_eq!(err, TaskmasterError::SessionNotFound(name("Nope")));
    }

    #[test]
    fn contains_by_name_or_session() {
        let mut list = SessionList::new();
        list.add(session("Lab 1")).unwrap();
        assert!(list.contains(&name("Lab 1")));
        assert!(list.contains_session(&session("Lab 1")));
        assert!(!list.contains(&name("Lab 2")));
    }

    #[test]
    fn iteration_is_insertion_order() {
        let list =
            SessionList::from_sessions(vec![session("B"), session("A"), session("C")]).unwrap();
        let names: Vec<_> = list.iter().map(|s| s.name().as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn set_sessions_rejects_duplicates_atomically() {
        let mut list = SessionList::from_sessions(vec![session("Keep")]).unwrap();
        let err = list
            .set_sessions(vec![session("X"), session("X")])
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::DuplicateEntity);
        assert!(list.contains(&name("Keep")));
    }
}
