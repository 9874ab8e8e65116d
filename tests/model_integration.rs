//! Integration tests for the model facade.
//!
//! Drives `ModelManager` through its public API only:
//! 1. Attendance and scoring in the active session
//! 2. Session switching and the record view
//! 3. Observer notification order
//! 4. Invariants checked with generated rosters

use proptest::prelude::*;
use std::sync::Arc;

use taskmaster::adapters::RecordingObserver;
use taskmaster::application::ModelManager;
use taskmaster::domain::foundation::{
    AttendanceType, ErrorCode, NusnetId, Score, SessionName, Timestamp,
};
use taskmaster::domain::record::StudentRecord;
use taskmaster::domain::student::{Name, Student, Tag};
use taskmaster::domain::taskmaster::{
    ActiveSession, ModelEvent, ReadOnlyTaskmaster, TaskmasterSnapshot,
};
use taskmaster::domain::view::{NameContainsKeywordsPredicate, ReadOnlyModel};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn id(raw: &str) -> NusnetId {
    NusnetId::new(raw).unwrap()
}

fn session_name(raw: &str) -> SessionName {
    SessionName::new(raw).unwrap()
}

fn student(raw_id: &str, raw_name: &str) -> Student {
    Student::new(id(raw_id), Name::new(raw_name).unwrap(), [])
}

fn student_a() -> Student {
    student("E0000111", "Alex Yeoh")
}

fn student_b() -> Student {
    student("E0000222", "Bernice Yu")
}

/// Two students enrolled; the default session is active.
fn two_student_model() -> ModelManager {
    let mut model = ModelManager::default();
    model.add_student(student_a()).unwrap();
    model.add_student(student_b()).unwrap();
    model
}

fn records_of(model: &ModelManager) -> Vec<(String, AttendanceType, u8)> {
    model
        .filtered_records()
        .iter()
        .map(|r| (r.nusnet_id().to_string(), r.attendance_type(), r.score().value()))
        .collect()
}

// =============================================================================
// Attendance and scoring
// =============================================================================

#[test]
fn marking_in_default_session_shows_in_record_view() {
    let mut model = two_student_model();
    assert_eq!(
        model.current_session(),
        &ActiveSession::SessionActive(session_name("Default session"))
    );

    model.mark_student(&student_a(), AttendanceType::Present).unwrap();

    assert_eq!(
        records_of(&model),
        vec![
            ("E0000111".to_string(), AttendanceType::Present, 0),
            ("E0000222".to_string(), AttendanceType::NoRecord, 0),
        ]
    );
}

#[test]
fn lowest_score_cohort_after_scoring() {
    let mut model = two_student_model();
    model.mark_student(&student_a(), AttendanceType::Present).unwrap();
    model.score_student_by_identity(&id("E0000111"), 7).unwrap();

    assert_eq!(model.lowest_score().unwrap(), Some(Score::MIN));
    let cohort = model.records_with_score(Score::MIN).unwrap();
    assert_eq!(cohort.len(), 1);
    assert_eq!(cohort[0].nusnet_id(), &id("E0000222"));
}

#[test]
fn out_of_range_score_is_rejected_without_change() {
    let mut model = two_student_model();
    model.score_student_by_identity(&id("E0000111"), 4).unwrap();

    let err = model.score_student_by_identity(&id("E0000111"), 11).unwrap_err();

    assert_eq!(err.code(), ErrorCode::InvalidArgument);
    assert_eq!(records_of(&model)[0].2, 4);
}

#[test]
fn strict_bulk_mark_is_all_or_nothing() {
    let mut model = two_student_model();
    let stranger = student("E0009999", "Stranger");

    let err = model
        .mark_all_students(&[student_a(), stranger], AttendanceType::Absent)
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::EntityNotFound);
    assert!(records_of(&model)
        .iter()
        .all(|(_, attendance, _)| *attendance == AttendanceType::NoRecord));
}

#[test]
fn best_effort_bulk_mark_skips_unknown_students() {
    let mut model = two_student_model();

    let skipped = model
        .mark_all_students_best_effort(&[id("E0000111"), id("E0009999")], AttendanceType::Absent)
        .unwrap();

    assert_eq!(skipped, vec![id("E0009999")]);
    assert_eq!(records_of(&model)[0].1, AttendanceType::Absent);
}

#[test]
fn imported_attendance_replaces_previous_marks() {
    let mut model = two_student_model();
    model.mark_student(&student_b(), AttendanceType::Present).unwrap();

    let imported = [StudentRecord::with_state(
        id("E0000111"),
        AttendanceType::Present,
        Score::try_new(8).unwrap(),
    )];
    let skipped = model.load_attendance(&imported).unwrap();

    assert!(skipped.is_empty());
    assert_eq!(
        records_of(&model),
        vec![
            ("E0000111".to_string(), AttendanceType::Present, 8),
            ("E0000222".to_string(), AttendanceType::NoRecord, 0),
        ]
    );
}

// =============================================================================
// Sessions and the record view
// =============================================================================

#[test]
fn switching_to_unknown_session_keeps_active_session() {
    let mut model = two_student_model();
    model.mark_student(&student_a(), AttendanceType::Present).unwrap();
    let before = records_of(&model);

    let err = model
        .change_session(Some(&session_name("NoSuchSession")))
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::SessionNotFound);
    assert_eq!(
        model.current_session().name(),
        Some(&session_name("Default session"))
    );
    assert_eq!(records_of(&model), before);
}

#[test]
fn sessions_keep_independent_records() {
    let mut model = two_student_model();
    model
        .create_session(session_name("Week 2"), Timestamp::now())
        .unwrap();
    model.mark_student(&student_a(), AttendanceType::Present).unwrap();

    model.change_session(Some(&session_name("Week 2"))).unwrap();
    assert!(records_of(&model)
        .iter()
        .all(|(_, attendance, _)| *attendance == AttendanceType::NoRecord));

    model.change_session(Some(&session_name("Default session"))).unwrap();
    assert_eq!(records_of(&model)[0].1, AttendanceType::Present);
}

#[test]
fn editing_student_identity_rekeys_active_record() {
    let mut model = two_student_model();
    model.score_student(&student_a(), 5).unwrap();
    let edited = Student::new(
        id("E0000333"),
        Name::new("Alex Yeoh").unwrap(),
        [Tag::new("repeat").unwrap()],
    );

    model.set_student(&student_a(), edited).unwrap();

    assert_eq!(records_of(&model)[0], ("E0000333".to_string(), AttendanceType::NoRecord, 5));
}

#[test]
fn student_search_filters_roster_view() {
    let mut model = two_student_model();
    model.update_filtered_student_list(NameContainsKeywordsPredicate::new(["bernice"]));

    let found: Vec<_> = model
        .filtered_students()
        .iter()
        .map(|s| s.nusnet_id().to_string())
        .collect();
    assert_eq!(found, vec!["E0000222"]);
}

#[test]
fn model_round_trips_through_snapshot() {
    let mut model = two_student_model();
    model.score_student(&student_b(), 9).unwrap();

    let snapshot = model.snapshot();
    let reloaded = ModelManager::new(&snapshot, Default::default()).unwrap();

    assert_eq!(reloaded.taskmaster().students(), snapshot.students.as_slice());
    let default = reloaded
        .taskmaster()
        .session(&session_name("Default session"))
        .unwrap();
    assert_eq!(
        default.records().get(&id("E0000222")).unwrap().score().value(),
        9
    );
    assert_eq!(
        reloaded.current_session().name(),
        Some(&session_name("Placeholder session"))
    );
}

#[test]
fn duplicate_students_in_snapshot_are_rejected() {
    let snapshot = TaskmasterSnapshot::new(vec![student_a(), student_a()], vec![]);
    let err = ModelManager::new(&snapshot, Default::default()).err().unwrap();
    assert_eq!(err.code(), ErrorCode::DuplicateEntity);
}

// =============================================================================
// Observers
// =============================================================================

#[test]
fn observers_see_new_session_records_on_switch() {
    let mut model = two_student_model();
    model
        .create_session(session_name("Week 2"), Timestamp::now())
        .unwrap();
    model.change_session(Some(&session_name("Week 2"))).unwrap();
    model.mark_student(&student_b(), AttendanceType::Absent).unwrap();
    model.change_session(Some(&session_name("Default session"))).unwrap();

    let recorder = Arc::new(RecordingObserver::new());
    model.subscribe(recorder.clone());
    model.update_filtered_record_list(|r: &StudentRecord| r.attendance_type().is_recorded());

    model.change_session(Some(&session_name("Week 2"))).unwrap();

    let observed = recorder.observed();
    assert_eq!(observed.len(), 1);
    assert_eq!(
        observed[0].active_session,
        ActiveSession::SessionActive(session_name("Week 2"))
    );
    // Rebinding resets the predicate, so both Week 2 records are visible.
    assert_eq!(observed[0].record_ids, vec![id("E0000111"), id("E0000222")]);
}

#[test]
fn deselecting_session_notifies_with_empty_record_view() {
    let mut model = two_student_model();
    let recorder = Arc::new(RecordingObserver::new());
    model.subscribe(recorder.clone());

    model.change_session(None).unwrap();

    let observed = recorder.observed();
    assert_eq!(
        observed[0].event,
        ModelEvent::ActiveSessionChanged {
            previous: Some(session_name("Default session")),
            current: None,
        }
    );
    assert!(observed[0].record_ids.is_empty());
    assert_eq!(
        model.mark_student(&student_a(), AttendanceType::Present).unwrap_err().code(),
        ErrorCode::NoActiveSession
    );
}

#[test]
fn every_successful_mutation_notifies_once() {
    let mut model = ModelManager::default();
    let recorder = Arc::new(RecordingObserver::new());
    model.subscribe(recorder.clone());

    model.add_student(student_a()).unwrap();
    model.score_student(&student_a(), 3).unwrap();
    model.clear_attendance().unwrap();
    let _ = model.add_student(student_a());

    let events: Vec<&str> = recorder
        .events()
        .iter()
        .map(ModelEvent::event_type)
        .collect();
    assert_eq!(events, vec!["students.changed", "records.changed", "records.changed"]);
}

// =============================================================================
// Properties
// =============================================================================

fn nusnet_id_strategy() -> impl Strategy<Value = NusnetId> {
    (0u32..10_000_000).prop_map(|n| NusnetId::new(format!("E{:07}", n)).unwrap())
}

fn roster_strategy() -> impl Strategy<Value = Vec<NusnetId>> {
    prop::collection::vec(nusnet_id_strategy(), 0..20)
}

fn enrol(model: &mut ModelManager, ids: &[NusnetId]) -> usize {
    ids.iter()
        .filter(|nusnet_id| {
            model
                .add_student(Student::new((*nusnet_id).clone(), Name::new("Student").unwrap(), []))
                .is_ok()
        })
        .count()
}

proptest! {
    #[test]
    fn roster_identities_stay_unique(ids in roster_strategy()) {
        let mut model = ModelManager::default();
        let enrolled = enrol(&mut model, &ids);

        let students = model.taskmaster().students();
        prop_assert_eq!(students.len(), enrolled);
        for (i, a) in students.iter().enumerate() {
            for b in &students[i + 1..] {
                prop_assert_ne!(a.nusnet_id(), b.nusnet_id());
            }
        }
    }

    #[test]
    fn new_session_has_one_fresh_record_per_student(ids in roster_strategy()) {
        let mut model = ModelManager::default();
        enrol(&mut model, &ids);
        model.create_session(session_name("Fresh"), Timestamp::now()).unwrap();

        let session = model.taskmaster().session(&session_name("Fresh")).unwrap();
        prop_assert_eq!(session.records().len(), model.taskmaster().students().len());
        for student in model.taskmaster().students() {
            let record = session.records().get(student.nusnet_id());
            prop_assert!(record.is_some());
            let record = record.unwrap();
            prop_assert_eq!(record.attendance_type(), AttendanceType::NoRecord);
            prop_assert_eq!(record.score(), Score::MIN);
        }
    }

    #[test]
    fn clearing_twice_equals_clearing_once(
        ids in roster_strategy(),
        scores in prop::collection::vec(0i32..=10, 20),
    ) {
        let mut model = ModelManager::default();
        enrol(&mut model, &ids);
        let roster: Vec<NusnetId> = model
            .taskmaster()
            .students()
            .iter()
            .map(|s| s.nusnet_id().clone())
            .collect();
        for (nusnet_id, score) in roster.iter().zip(&scores) {
            model.score_student_by_identity(nusnet_id, *score).unwrap();
            model.mark_student_by_identity(nusnet_id, AttendanceType::Present).unwrap();
        }

        model.clear_attendance().unwrap();
        let once = model.snapshot();
        model.clear_attendance().unwrap();

        prop_assert_eq!(model.snapshot(), once);
        for record in model.filtered_records() {
            prop_assert_eq!(record.attendance_type(), AttendanceType::NoRecord);
            prop_assert_eq!(record.score(), Score::MIN);
        }
    }

    #[test]
    fn lowest_score_cohort_is_nonempty_and_minimal(
        ids in roster_strategy(),
        scores in prop::collection::vec(0i32..=10, 20),
    ) {
        let mut model = ModelManager::default();
        enrol(&mut model, &ids);
        let roster: Vec<NusnetId> = model
            .taskmaster()
            .students()
            .iter()
            .map(|s| s.nusnet_id().clone())
            .collect();
        for (nusnet_id, score) in roster.iter().zip(&scores) {
            model.score_student_by_identity(nusnet_id, *score).unwrap();
        }

        match model.lowest_score().unwrap() {
            None => prop_assert!(roster.is_empty()),
            Some(lowest) => {
                let cohort = model.records_with_score(lowest).unwrap();
                prop_assert!(!cohort.is_empty());
                let minimum = model.filtered_records().iter().map(|r| r.score()).min();
                prop_assert_eq!(Some(lowest), minimum);
                prop_assert!(cohort.iter().all(|r| r.score() == lowest));
            }
        }
    }
}
