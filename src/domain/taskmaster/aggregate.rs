//! Taskmaster aggregate root.
//!
//! The single entry point for roster, session and record mutations. It owns
//! the student registry, the session history and the active-session state,
//! and enforces the invariants that span them.
//!
//! # Invariants
//!
//! - Student identities and session names are unique
//! - If a session is active, it is present in the session registry
//! - A session created here holds exactly one record per enrolled student
//! - Every failed operation leaves the aggregate unchanged

use crate::domain::foundation::{
    AttendanceType, EntityKind, NusnetId, Score, SessionName, TaskmasterError, Timestamp,
};
use crate::domain::record::{StudentRecord, StudentRecordList};
use crate::domain::session::{Session, SessionList};
use crate::domain::student::{Student, UniqueStudentList};

use super::{ActiveSession, ReadOnlyTaskmaster, TaskmasterSnapshot};

/// Names given to sessions the aggregate creates on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDefaults {
    /// Session created and activated by a fresh aggregate.
    pub default_session_name: SessionName,

    /// Session created and activated after a data reset.
    pub placeholder_session_name: SessionName,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            default_session_name: SessionName::from_static("Default session"),
            placeholder_session_name: SessionName::from_static("Placeholder session"),
        }
    }
}

/// Aggregate root holding students, sessions and the active session.
#[derive(Debug, Clone)]
pub struct Taskmaster {
    students: UniqueStudentList,
    sessions: SessionList,
    active: ActiveSession,
    defaults: SessionDefaults,
}

impl Taskmaster {
    /// Creates an empty aggregate whose default session is already active.
    pub fn new() -> Self {
        Self::with_defaults(SessionDefaults::default())
    }

    /// Creates an empty aggregate using the given session names.
    pub fn with_defaults(defaults: SessionDefaults) -> Self {
        let default_session = Session::from_roster(
            defaults.default_session_name.clone(),
            Timestamp::now(),
            std::iter::empty::<&Student>(),
        );
        let active = ActiveSession::SessionActive(default_session.name().clone());
        let mut sessions = SessionList::new();
        // An empty registry cannot reject its first session.
        let _ = sessions.add(default_session);

        Self {
            students: UniqueStudentList::new(),
            sessions,
            active,
            defaults,
        }
    }

    /// Creates an aggregate holding the contents of `source`.
    ///
    /// # Errors
    ///
    /// See [`Taskmaster::reset_data`].
    pub fn from_snapshot(
        source: &impl ReadOnlyTaskmaster,
        defaults: SessionDefaults,
    ) -> Result<Self, TaskmasterError> {
        let mut taskmaster = Self::with_defaults(defaults);
        taskmaster.reset_data(source)?;
        Ok(taskmaster)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn student_list(&self) -> &UniqueStudentList {
        &self.students
    }

    pub fn session_list(&self) -> &SessionList {
        &self.sessions
    }

    /// Returns the active-session state.
    pub fn current_session(&self) -> &ActiveSession {
        &self.active
    }

    /// Returns the active session, if one is selected.
    pub fn active_session(&self) -> Option<&Session> {
        self.active
            .name()
            .and_then(|name| self.sessions.get(name).ok())
    }

    /// Returns the session called `name`.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if no session has that name
    pub fn session(&self, name: &SessionName) -> Result<&Session, TaskmasterError> {
        self.sessions.get(name)
    }

    /// Copies the roster and session history for the storage collaborator.
    pub fn snapshot(&self) -> TaskmasterSnapshot {
        TaskmasterSnapshot::of(self)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Whole-data operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces all data with the contents of `source`, then activates a
    /// placeholder session seeded from the new roster.
    ///
    /// A placeholder already in `source` that still holds exactly one blank
    /// record per enrolled student is reactivated instead of adding another.
    ///
    /// # Errors
    ///
    /// - `DuplicateEntity` if `source` repeats a student identity or session
    ///   name; the aggregate is left unchanged
    pub fn reset_data(&mut self, source: &impl ReadOnlyTaskmaster) -> Result<(), TaskmasterError> {
        let students = UniqueStudentList::from_students(source.students().to_vec())?;
        let mut sessions = SessionList::from_sessions(source.sessions().to_vec())?;

        let base = &self.defaults.placeholder_session_name;
        let placeholder_name = match Self::untouched_placeholder(&sessions, &students, base) {
            Some(name) => name,
            None => {
                let name = Self::unused_session_name(&sessions, base)?;
                sessions.add(Session::from_roster(name.clone(), Timestamp::now(), &students))?;
                name
            }
        };

        self.students = students;
        self.sessions = sessions;
        self.active = ActiveSession::SessionActive(placeholder_name);
        Ok(())
    }

    /// Replaces the roster. Existing session records are left untouched.
    ///
    /// # Errors
    ///
    /// - `DuplicateEntity` if `students` repeats an identity
    pub fn set_students(&mut self, students: Vec<Student>) -> Result<(), TaskmasterError> {
        self.students.set_students(students)
    }

    /// Replaces the session history. Clears the active session when it no
    /// longer resolves.
    ///
    /// # Errors
    ///
    /// - `DuplicateEntity` if `sessions` repeats a name
    pub fn set_sessions(&mut self, sessions: Vec<Session>) -> Result<(), TaskmasterError> {
        self.sessions.set_sessions(sessions)?;
        if let Some(name) = self.active.name() {
            if !self.sessions.contains(name) {
                self.active = ActiveSession::NoSessionSelected;
            }
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Student-level operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns true if a student with the same identity is registered.
    pub fn has_student(&self, student: &Student) -> bool {
        self.students.contains_student(student)
    }

    pub fn has_student_id(&self, nusnet_id: &NusnetId) -> bool {
        self.students.contains(nusnet_id)
    }

    /// Adds a student and gives them a fresh record in the active session.
    ///
    /// # Errors
    ///
    /// - `DuplicateEntity` if the identity is already registered
    pub fn add_student(&mut self, student: Student) -> Result<(), TaskmasterError> {
        let nusnet_id = student.nusnet_id().clone();
        self.students.add(student)?;
        if let Some(session) = self.active_session_mut() {
            session.records_mut().ensure_record(&nusnet_id);
        }
        Ok(())
    }

    /// Removes a student from the roster.
    ///
    /// Records of the student in existing sessions are kept.
    ///
    /// # Errors
    ///
    /// - `EntityNotFound` if `target` is not registered
    pub fn remove_student(&mut self, target: &Student) -> Result<Student, TaskmasterError> {
        self.students.remove(target)
    }

    /// Replaces `target` with `edited`. If the identity changes, the active
    /// session's record follows it.
    ///
    /// # Errors
    ///
    /// - `EntityNotFound` if `target` is not registered
    /// - `DuplicateEntity` if `edited` collides with another student
    pub fn set_student(
        &mut self,
        target: &Student,
        edited: Student,
    ) -> Result<(), TaskmasterError> {
        let from = target.nusnet_id().clone();
        let to = edited.nusnet_id().clone();
        self.students.replace(target, edited)?;
        if let Some(session) = self.active_session_mut() {
            session.records_mut().rekey(&from, &to);
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Session-level operations
    // ─────────────────────────────────────────────────────────────────────────

    pub fn has_session(&self, name: &SessionName) -> bool {
        self.sessions.contains(name)
    }

    pub fn contains_session(&self, session: &Session) -> bool {
        self.sessions.contains_session(session)
    }

    /// Adds an existing session to the history. Does not activate it.
    ///
    /// # Errors
    ///
    /// - `DuplicateEntity` if the name is taken
    pub fn add_session(&mut self, session: Session) -> Result<(), TaskmasterError> {
        self.sessions.add(session)
    }

    /// Creates a session with one fresh record per current student and adds
    /// it to the history. Does not activate it.
    ///
    /// # Errors
    ///
    /// - `DuplicateEntity` if the name is taken
    pub fn create_session(
        &mut self,
        name: SessionName,
        created_at: Timestamp,
    ) -> Result<&Session, TaskmasterError> {
        if self.sessions.contains(&name) {
            return Err(TaskmasterError::duplicate(EntityKind::Session, &name));
        }
        let session = Session::from_roster(name.clone(), created_at, &self.students);
        self.sessions.add(session)?;
        self.sessions.get(&name)
    }

    /// Switches the active session; `None` deselects.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if `name` is not in the history; the active
    ///   session is left unchanged
    pub fn change_session(&mut self, name: Option<&SessionName>) -> Result<(), TaskmasterError> {
        self.active = match name {
            Some(name) => {
                self.sessions.get(name)?;
                ActiveSession::SessionActive(name.clone())
            }
            None => ActiveSession::NoSessionSelected,
        };
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Record-level operations (active session)
    // ─────────────────────────────────────────────────────────────────────────

    /// Marks the attendance of `target` in the active session.
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` if no session is selected
    /// - `EntityNotFound` if the student has no record in the active session
    pub fn mark_student(
        &mut self,
        target: &Student,
        attendance_type: AttendanceType,
    ) -> Result<(), TaskmasterError> {
        self.mark_student_by_identity(target.nusnet_id(), attendance_type)
    }

    /// Marks the attendance of the student with `nusnet_id` in the active session.
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` if no session is selected
    /// - `EntityNotFound` if there is no record for `nusnet_id`
    pub fn mark_student_by_identity(
        &mut self,
        nusnet_id: &NusnetId,
        attendance_type: AttendanceType,
    ) -> Result<(), TaskmasterError> {
        self.require_active_session_mut()?
            .mark_student_attendance(nusnet_id, attendance_type)
    }

    /// Marks every listed student, or none of them.
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` if no session is selected
    /// - `EntityNotFound` for the first identity without a record; nothing
    ///   is marked in that case
    pub fn mark_all_students(
        &mut self,
        nusnet_ids: &[NusnetId],
        attendance_type: AttendanceType,
    ) -> Result<(), TaskmasterError> {
        let session = self.require_active_session_mut()?;
        Self::ensure_all_recorded(session, nusnet_ids)?;
        for nusnet_id in nusnet_ids {
            session.mark_student_attendance(nusnet_id, attendance_type)?;
        }
        Ok(())
    }

    /// Marks every listed student that has a record, skipping the rest.
    ///
    /// Intended for import-style flows where partial application is wanted.
    /// Returns the skipped identities.
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` if no session is selected
    pub fn mark_all_students_best_effort(
        &mut self,
        nusnet_ids: &[NusnetId],
        attendance_type: AttendanceType,
    ) -> Result<Vec<NusnetId>, TaskmasterError> {
        let session = self.require_active_session_mut()?;
        let mut skipped = Vec::new();
        for nusnet_id in nusnet_ids {
            match session.mark_student_attendance(nusnet_id, attendance_type) {
                Ok(()) => {}
                Err(err) if err.is_not_found() => skipped.push(nusnet_id.clone()),
                Err(err) => return Err(err),
            }
        }
        Ok(skipped)
    }

    /// Scores the participation of `target` in the active session.
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` if no session is selected
    /// - `InvalidArgument` if `score` is outside 0..=10
    /// - `EntityNotFound` if the student has no record in the active session
    pub fn score_student(&mut self, target: &Student, score: i32) -> Result<(), TaskmasterError> {
        self.score_student_by_identity(target.nusnet_id(), score)
    }

    /// Scores the participation of the student with `nusnet_id`.
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` if no session is selected
    /// - `InvalidArgument` if `score` is outside 0..=10
    /// - `EntityNotFound` if there is no record for `nusnet_id`
    pub fn score_student_by_identity(
        &mut self,
        nusnet_id: &NusnetId,
        score: i32,
    ) -> Result<(), TaskmasterError> {
        self.require_active_session_mut()?
            .score_student(nusnet_id, score)
    }

    /// Scores every listed student, or none of them.
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` if no session is selected
    /// - `InvalidArgument` if `score` is outside 0..=10
    /// - `EntityNotFound` for the first identity without a record
    pub fn score_all_students(
        &mut self,
        nusnet_ids: &[NusnetId],
        score: i32,
    ) -> Result<(), TaskmasterError> {
        Score::try_new(score)?;
        let session = self.require_active_session_mut()?;
        Self::ensure_all_recorded(session, nusnet_ids)?;
        for nusnet_id in nusnet_ids {
            session.score_student(nusnet_id, score)?;
        }
        Ok(())
    }

    /// Scores every listed student that has a record, skipping the rest.
    /// Returns the skipped identities.
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` if no session is selected
    /// - `InvalidArgument` if `score` is outside 0..=10
    pub fn score_all_students_best_effort(
        &mut self,
        nusnet_ids: &[NusnetId],
        score: i32,
    ) -> Result<Vec<NusnetId>, TaskmasterError> {
        Score::try_new(score)?;
        let session = self.require_active_session_mut()?;
        let mut skipped = Vec::new();
        for nusnet_id in nusnet_ids {
            match session.score_student(nusnet_id, score) {
                Ok(()) => {}
                Err(err) if err.is_not_found() => skipped.push(nusnet_id.clone()),
                Err(err) => return Err(err),
            }
        }
        Ok(skipped)
    }

    /// Resets every record of the active session to `NO_RECORD` / 0.
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` if no session is selected
    pub fn clear_attendance(&mut self) -> Result<(), TaskmasterError> {
        self.require_active_session_mut()?.clear_attendance();
        Ok(())
    }

    /// Overwrites records of the active session by identity.
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` if no session is selected
    /// - `EntityNotFound` if any record has no counterpart; nothing changes
    pub fn update_student_records(
        &mut self,
        records: &[StudentRecord],
    ) -> Result<(), TaskmasterError> {
        self.require_active_session_mut()?
            .update_student_records(records)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Record-level queries (active session)
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the lowest score in the active session, `None` if it has no records.
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` if no session is selected
    pub fn lowest_score(&self) -> Result<Option<Score>, TaskmasterError> {
        Ok(self.require_active_session()?.lowest_score())
    }

    /// Returns the active session's records with exactly `score`.
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` if no session is selected
    pub fn records_with_score(&self, score: Score) -> Result<Vec<&StudentRecord>, TaskmasterError> {
        Ok(self
            .require_active_session()?
            .records()
            .records_with_score(score)
            .collect())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn require_active_session(&self) -> Result<&Session, TaskmasterError> {
        self.active_session().ok_or(TaskmasterError::NoActiveSession)
    }

    fn require_active_session_mut(&mut self) -> Result<&mut Session, TaskmasterError> {
        self.active_session_mut().ok_or(TaskmasterError::NoActiveSession)
    }

    fn active_session_mut(&mut self) -> Option<&mut Session> {
        let name = self.active.name()?.clone();
        self.sessions.get_mut(&name).ok()
    }

    fn ensure_all_recorded(
        session: &Session,
        nusnet_ids: &[NusnetId],
    ) -> Result<(), TaskmasterError> {
        match nusnet_ids.iter().find(|id| !session.records().contains(id)) {
            Some(missing) => Err(TaskmasterError::not_found(EntityKind::StudentRecord, missing)),
            None => Ok(()),
        }
    }

    /// Returns `base`, or `base` with the lowest numeric suffix not yet taken.
    /// Finds the most recent placeholder whose records are still exactly
    /// the fresh records of `students`.
    fn untouched_placeholder(
        sessions: &SessionList,
        students: &UniqueStudentList,
        base: &SessionName,
    ) -> Option<SessionName> {
        let fresh = StudentRecordList::from_students(students);
        sessions
            .iter()
            .rev()
            .find(|session| {
                Self::is_placeholder_name(session.name(), base) && session.records() == &fresh
            })
            .map(|session| session.name().clone())
    }

    fn is_placeholder_name(name: &SessionName, base: &SessionName) -> bool {
        name == base
            || name
                .as_str()
                .strip_prefix(base.as_str())
                .and_then(|rest| rest.strip_prefix(' '))
                .is_some_and(|suffix| suffix.parse::<usize>().is_ok_and(|n| n >= 2))
    }

    fn unused_session_name(
        sessions: &SessionList,
        base: &SessionName,
    ) -> Result<SessionName, TaskmasterError> {
        if !sessions.contains(base) {
            return Ok(base.clone());
        }
        let mut suffix = 2usize;
        loop {
            let candidate = SessionName::new(format!("{} {}", base, suffix))?;
            if !sessions.contains(&candidate) {
                return Ok(candidate);
            }
            suffix += 1;
        }
    }
}

impl Default for Taskmaster {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadOnlyTaskmaster for Taskmaster {
    fn students(&self) -> &[Student] {
        self.students.as_slice()
    }

    fn sessions(&self) -> &[Session] {
        self.sessions.as_slice()
    }
}
