//! ModelManager - the model facade used by commands and displays.
//!
//! Wraps the `Taskmaster` aggregate with the three filtered views and a list
//! of synchronous observers. Every mutation runs to completion, including
//! any record-view rebinding, before observers are notified.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::foundation::{
    AttendanceType, NusnetId, Score, SessionName, TaskmasterError, Timestamp,
};
use crate::domain::record::StudentRecord;
use crate::domain::session::Session;
use crate::domain::student::Student;
use crate::domain::taskmaster::{
    ActiveSession, ModelEvent, ReadOnlyTaskmaster, SessionDefaults, Taskmaster, TaskmasterSnapshot,
};
use crate::domain::view::{FilteredView, Predicate, ReadOnlyModel, RecordView, ScoreEqualsPredicate};
use crate::ports::ModelObserver;

/// The in-memory model: aggregate, filtered views and observers.
pub struct ModelManager {
    taskmaster: Taskmaster,
    filtered_students: FilteredView<Student>,
    filtered_sessions: FilteredView<Session>,
    filtered_records: RecordView,
    observers: Vec<Arc<dyn ModelObserver>>,
}

impl ModelManager {
    /// Creates a model from a stored snapshot.
    ///
    /// A placeholder session seeded from the loaded roster is created and
    /// made active.
    ///
    /// # Errors
    ///
    /// - `DuplicateEntity` if the snapshot repeats a student or session
    pub fn new(
        source: &impl ReadOnlyTaskmaster,
        defaults: SessionDefaults,
    ) -> Result<Self, TaskmasterError> {
        let taskmaster = Taskmaster::from_snapshot(source, defaults)?;
        debug!(
            students = taskmaster.students().len(),
            sessions = taskmaster.sessions().len(),
            "Model created from snapshot"
        );
        Ok(Self::from_taskmaster(taskmaster))
    }

    /// Creates an empty model whose default session is active.
    pub fn with_defaults(defaults: SessionDefaults) -> Self {
        Self::from_taskmaster(Taskmaster::with_defaults(defaults))
    }

    fn from_taskmaster(taskmaster: Taskmaster) -> Self {
        let mut manager = Self {
            taskmaster,
            filtered_students: FilteredView::show_all(),
            filtered_sessions: FilteredView::show_all(),
            filtered_records: RecordView::unbound(),
            observers: Vec::new(),
        };
        manager.bind_records_to_active_session();
        manager
    }

    /// Registers an observer for every subsequent change.
    pub fn subscribe(&mut self, observer: Arc<dyn ModelObserver>) {
        debug!(observer = observer.name(), "Observer subscribed");
        self.observers.push(observer);
    }

    /// Read access to the aggregate.
    pub fn taskmaster(&self) -> &Taskmaster {
        &self.taskmaster
    }

    /// Copies the roster and session history for saving.
    pub fn snapshot(&self) -> TaskmasterSnapshot {
        self.taskmaster.snapshot()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Whole-data operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces all data with `source` and activates a fresh placeholder
    /// session.
    ///
    /// # Errors
    ///
    /// - `DuplicateEntity` if `source` repeats a student or session; the
    ///   model is left unchanged
    pub fn reset_data(&mut self, source: &impl ReadOnlyTaskmaster) -> Result<(), TaskmasterError> {
        debug!(
            students = source.students().len(),
            sessions = source.sessions().len(),
            "Resetting model data"
        );
        self.taskmaster.reset_data(source)?;
        self.bind_records_to_active_session();

        info!(
            active_session = %self.taskmaster.current_session(),
            "Model data reset"
        );
        self.notify(ModelEvent::DataReset);
        Ok(())
    }

    /// Replaces the roster. Existing session records are left untouched.
    ///
    /// # Errors
    ///
    /// - `DuplicateEntity` if `students` repeats an identity
    pub fn set_students(&mut self, students: Vec<Student>) -> Result<(), TaskmasterError> {
        debug!(count = students.len(), "Replacing roster");
        self.taskmaster.set_students(students)?;
        self.notify(ModelEvent::StudentsChanged);
        Ok(())
    }

    /// Replaces the session history.
    ///
    /// # Errors
    ///
    /// - `DuplicateEntity` if `sessions` repeats a name
    pub fn set_sessions(&mut self, sessions: Vec<Session>) -> Result<(), TaskmasterError> {
        debug!(count = sessions.len(), "Replacing session history");
        let previous = self.taskmaster.current_session().name().cloned();
        self.taskmaster.set_sessions(sessions)?;

        let current = self.taskmaster.current_session().name().cloned();
        if current != previous {
            self.bind_records_to_active_session();
        }
        self.notify(ModelEvent::SessionsChanged);
        if current != previous {
            self.notify(ModelEvent::ActiveSessionChanged { previous, current });
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Student operations
    // ─────────────────────────────────────────────────────────────────────────

    pub fn has_student(&self, student: &Student) -> bool {
        self.taskmaster.has_student(student)
    }

    /// Enrols a student and shows the full student list again.
    ///
    /// # Errors
    ///
    /// - `DuplicateEntity` if the identity is already enrolled
    pub fn add_student(&mut self, student: Student) -> Result<(), TaskmasterError> {
        debug!(nusnet_id = %student.nusnet_id(), "Adding student");
        self.taskmaster.add_student(student)?;
        self.filtered_students = FilteredView::show_all();
        self.notify(ModelEvent::StudentsChanged);
        Ok(())
    }

    /// Removes a student from the roster. Session records are kept.
    ///
    /// # Errors
    ///
    /// - `EntityNotFound` if no enrolled student equals `target`
    pub fn delete_student(&mut self, target: &Student) -> Result<Student, TaskmasterError> {
        debug!(nusnet_id = %target.nusnet_id(), "Deleting student");
        let removed = self.taskmaster.remove_student(target)?;
        self.notify(ModelEvent::StudentsChanged);
        Ok(removed)
    }

    /// Replaces `target` with `edited`.
    ///
    /// # Errors
    ///
    /// - `EntityNotFound` if no enrolled student equals `target`
    /// - `DuplicateEntity` if `edited` collides with another student
    pub fn set_student(
        &mut self,
        target: &Student,
        edited: Student,
    ) -> Result<(), TaskmasterError> {
        debug!(
            nusnet_id = %target.nusnet_id(),
            edited_id = %edited.nusnet_id(),
            "Editing student"
        );
        self.taskmaster.set_student(target, edited)?;
        self.notify(ModelEvent::StudentsChanged);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Session operations
    // ─────────────────────────────────────────────────────────────────────────

    pub fn has_session(&self, name: &SessionName) -> bool {
        self.taskmaster.has_session(name)
    }

    /// Adds an already-built session to the history and shows the full
    /// session list again.
    ///
    /// # Errors
    ///
    /// - `DuplicateEntity` if the name is taken
    pub fn add_session(&mut self, session: Session) -> Result<(), TaskmasterError> {
        debug!(session = %session.name(), "Adding session");
        self.taskmaster.add_session(session)?;
        self.filtered_sessions = FilteredView::show_all();
        self.notify(ModelEvent::SessionsChanged);
        Ok(())
    }

    /// Creates a session seeded with one record per enrolled student and
    /// shows the full session list again.
    ///
    /// # Errors
    ///
    /// - `DuplicateEntity` if the name is taken
    pub fn create_session(
        &mut self,
        name: SessionName,
        created_at: Timestamp,
    ) -> Result<(), TaskmasterError> {
        debug!(session = %name, "Creating session");
        self.taskmaster.create_session(name, created_at)?;
        self.filtered_sessions = FilteredView::show_all();
        self.notify(ModelEvent::SessionsChanged);
        Ok(())
    }

    /// Switches the active session; `None` deselects.
    ///
    /// The record view is rebound to the target session before the
    /// active-session reference changes, so observers of the switch always
    /// read the new session's records.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if `name` is not in the history; nothing changes
    pub fn change_session(&mut self, name: Option<&SessionName>) -> Result<(), TaskmasterError> {
        debug!(session = ?name.map(SessionName::as_str), "Changing session");
        let previous = self.taskmaster.current_session().name().cloned();

        match name {
            Some(name) => {
                self.taskmaster.session(name)?;
                self.filtered_records.rebind(name.clone());
            }
            None => self.filtered_records.unbind(),
        }
        self.taskmaster.change_session(name)?;

        info!(
            previous = ?previous.as_ref().map(SessionName::as_str),
            current = %self.taskmaster.current_session(),
            "Active session changed"
        );
        self.notify(ModelEvent::ActiveSessionChanged {
            previous,
            current: name.cloned(),
        });
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Record operations (active session)
    // ─────────────────────────────────────────────────────────────────────────

    /// Marks the attendance of one student.
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` if no session is selected
    /// - `EntityNotFound` if the student has no record
    pub fn mark_student(
        &mut self,
        target: &Student,
        attendance_type: AttendanceType,
    ) -> Result<(), TaskmasterError> {
        debug!(nusnet_id = %target.nusnet_id(), %attendance_type, "Marking student");
        self.taskmaster.mark_student(target, attendance_type)?;
        self.notify_records_changed();
        Ok(())
    }

    /// Marks the attendance of the student with `nusnet_id`.
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
        debug!(nusnet_id = %nusnet_id, %attendance_type, "Marking student");
        self.taskmaster
            .mark_student_by_identity(nusnet_id, attendance_type)?;
        self.notify_records_changed();
        Ok(())
    }

    /// Marks every listed student, or none of them.
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` if no session is selected
    /// - `EntityNotFound` if any student has no record
    pub fn mark_all_students(
        &mut self,
        targets: &[Student],
        attendance_type: AttendanceType,
    ) -> Result<(), TaskmasterError> {
        debug!(count = targets.len(), %attendance_type, "Marking students");
        self.taskmaster
            .mark_all_students(&Self::identities(targets), attendance_type)?;
        self.notify_records_changed();
        Ok(())
    }

    /// Marks every listed student that has a record and returns the
    /// identities that were skipped.
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` if no session is selected
    pub fn mark_all_students_best_effort(
        &mut self,
        nusnet_ids: &[NusnetId],
        attendance_type: AttendanceType,
    ) -> Result<Vec<NusnetId>, TaskmasterError> {
        debug!(count = nusnet_ids.len(), %attendance_type, "Marking students, skipping unknown");
        let skipped = self
            .taskmaster
            .mark_all_students_best_effort(nusnet_ids, attendance_type)?;
        Self::warn_skipped(&skipped);
        self.notify_records_changed();
        Ok(skipped)
    }

    /// Scores the participation of one student.
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` if no session is selected
    /// - `InvalidArgument` if `score` is outside 0..=10
    /// - `EntityNotFound` if the student has no record
    pub fn score_student(&mut self, target: &Student, score: i32) -> Result<(), TaskmasterError> {
        debug!(nusnet_id = %target.nusnet_id(), score, "Scoring student");
        self.taskmaster.score_student(target, score)?;
        self.notify_records_changed();
        Ok(())
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
        debug!(nusnet_id = %nusnet_id, score, "Scoring student");
        self.taskmaster.score_student_by_identity(nusnet_id, score)?;
        self.notify_records_changed();
        Ok(())
    }

    /// Scores every listed student, or none of them.
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` if no session is selected
    /// - `InvalidArgument` if `score` is outside 0..=10
    /// - `EntityNotFound` if any student has no record
    pub fn score_all_students(
        &mut self,
        targets: &[Student],
        score: i32,
    ) -> Result<(), TaskmasterError> {
        debug!(count = targets.len(), score, "Scoring students");
        self.taskmaster
            .score_all_students(&Self::identities(targets), score)?;
        self.notify_records_changed();
        Ok(())
    }

    /// Scores every listed student that has a record and returns the
    /// identities that were skipped.
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
        debug!(count = nusnet_ids.len(), score, "Scoring students, skipping unknown");
        let skipped = self
            .taskmaster
            .score_all_students_best_effort(nusnet_ids, score)?;
        Self::warn_skipped(&skipped);
        self.notify_records_changed();
        Ok(skipped)
    }

    /// Resets every record of the active session.
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` if no session is selected
    pub fn clear_attendance(&mut self) -> Result<(), TaskmasterError> {
        debug!("Clearing attendance");
        self.taskmaster.clear_attendance()?;
        self.notify_records_changed();
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
        debug!(count = records.len(), "Updating student records");
        self.taskmaster.update_student_records(records)?;
        self.notify_records_changed();
        Ok(())
    }

    /// Clears the active session, then applies the attendance and score of
    /// each imported record. Records for students not in the session are
    /// skipped and returned.
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` if no session is selected
    pub fn load_attendance(
        &mut self,
        records: &[StudentRecord],
    ) -> Result<Vec<NusnetId>, TaskmasterError> {
        debug!(count = records.len(), "Loading attendance");
        self.taskmaster.clear_attendance()?;

        let mut skipped = Vec::new();
        for record in records {
            let nusnet_id = record.nusnet_id();
            match self
                .taskmaster
                .mark_student_by_identity(nusnet_id, record.attendance_type())
            {
                Ok(()) => self
                    .taskmaster
                    .score_student_by_identity(nusnet_id, i32::from(record.score().value()))?,
                Err(err) if err.is_not_found() => {
                    warn!(
                        nusnet_id = %nusnet_id,
                        "Skipping imported record with no matching student"
                    );
                    skipped.push(nusnet_id.clone());
                }
                Err(err) => return Err(err),
            }
        }

        self.notify_records_changed();
        Ok(skipped)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries and view predicates
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the lowest score in the active session, `None` if it is empty.
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` if no session is selected
    pub fn lowest_score(&self) -> Result<Option<Score>, TaskmasterError> {
        self.taskmaster.lowest_score()
    }

    /// Returns the active session's records with exactly `score`.
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` if no session is selected
    pub fn records_with_score(&self, score: Score) -> Result<Vec<&StudentRecord>, TaskmasterError> {
        self.taskmaster.records_with_score(score)
    }

    pub fn update_filtered_student_list(&mut self, predicate: impl Predicate<Student> + 'static) {
        self.filtered_students.set_predicate(predicate);
    }

    pub fn update_filtered_session_list(&mut self, predicate: impl Predicate<Session> + 'static) {
        self.filtered_sessions.set_predicate(predicate);
    }

    pub fn update_filtered_record_list(
        &mut self,
        predicate: impl Predicate<StudentRecord> + 'static,
    ) {
        self.filtered_records.set_predicate(predicate);
    }

    /// Narrows the record view to the students sharing the lowest score.
    /// Returns that score, or `None` when the session has no records.
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` if no session is selected
    pub fn show_lowest_scoring_students(&mut self) -> Result<Option<Score>, TaskmasterError> {
        let lowest = self.taskmaster.lowest_score()?;
        if let Some(score) = lowest {
            debug!(score = score.value(), "Showing lowest scoring students");
            self.filtered_records.set_predicate(ScoreEqualsPredicate(score));
        }
        Ok(lowest)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn bind_records_to_active_session(&mut self) {
        match self.taskmaster.current_session().name() {
            Some(name) => self.filtered_records.rebind(name.clone()),
            None => self.filtered_records.unbind(),
        }
    }

    fn identities(students: &[Student]) -> Vec<NusnetId> {
        students.iter().map(|s| s.nusnet_id().clone()).collect()
    }

    fn warn_skipped(skipped: &[NusnetId]) {
        for nusnet_id in skipped {
            warn!(nusnet_id = %nusnet_id, "Skipped student with no record in active session");
        }
    }

    fn notify_records_changed(&self) {
        if let Some(session) = self.taskmaster.current_session().name() {
            self.notify(ModelEvent::RecordsChanged {
                session: session.clone(),
            });
        }
    }

    fn notify(&self, event: ModelEvent) {
        for observer in &self.observers {
            debug!(
                observer = observer.name(),
                event_type = event.event_type(),
                "Notifying observer"
            );
            observer.on_event(&event, self);
        }
    }
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::with_defaults(SessionDefaults::default())
    }
}

impl ReadOnlyModel for ModelManager {
    fn filtered_students(&self) -> Vec<&Student> {
        self.filtered_students.apply(self.taskmaster.students())
    }

    fn filtered_sessions(&self) -> Vec<&Session> {
        self.filtered_sessions.apply(self.taskmaster.sessions())
    }

    fn filtered_records(&self) -> Vec<&StudentRecord> {
        self.filtered_records.apply(self.taskmaster.session_list())
    }

    fn current_session(&self) -> &ActiveSession {
        self.taskmaster.current_session()
    }
}
