//! Integration tests for snapshot persistence.
//!
//! Saves a populated model through the storage adapters and rebuilds a
//! model from what was loaded back.

use tempfile::TempDir;

use taskmaster::adapters::{FileSnapshotStorage, InMemorySnapshotStorage, SnapshotFormat};
use taskmaster::application::ModelManager;
use taskmaster::domain::foundation::{AttendanceType, NusnetId, SessionName, Timestamp};
use taskmaster::domain::student::{Name, Student, Tag};
use taskmaster::domain::taskmaster::{ReadOnlyTaskmaster, SessionDefaults};
use taskmaster::ports::{SnapshotStorage, SnapshotStorageError};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn session_name(raw: &str) -> SessionName {
    SessionName::new(raw).unwrap()
}

fn populated_model() -> ModelManager {
    let mut model = ModelManager::default();
    let alex = Student::new(
        NusnetId::new("E0000111").unwrap(),
        Name::new("Alex Yeoh").unwrap(),
        [Tag::new("tutorialA").unwrap()],
    );
    let bernice = Student::new(
        NusnetId::new("E0000222").unwrap(),
        Name::new("Bernice Yu").unwrap(),
        [],
    );
    model.add_student(alex.clone()).unwrap();
    model.add_student(bernice).unwrap();
    model
        .create_session(session_name("Week 1"), Timestamp::now())
        .unwrap();
    model.change_session(Some(&session_name("Week 1"))).unwrap();
    model.mark_student(&alex, AttendanceType::Present).unwrap();
    model.score_student(&alex, 6).unwrap();
    model
}

async fn round_trip(storage: &impl SnapshotStorage) {
    let model = populated_model();
    storage.save(&model.snapshot()).await.unwrap();

    let loaded = storage.load().await.unwrap().expect("snapshot was saved");
    assert_eq!(loaded, model.snapshot());

    let reloaded = ModelManager::new(&loaded, SessionDefaults::default()).unwrap();
    let week_1 = reloaded.taskmaster().session(&session_name("Week 1")).unwrap();
    let record = week_1
        .records()
        .get(&NusnetId::new("E0000111").unwrap())
        .unwrap();
    assert_eq!(record.attendance_type(), AttendanceType::Present);
    assert_eq!(record.score().value(), 6);
    assert_eq!(reloaded.taskmaster().sessions().len(), 3);
}

// =============================================================================
// File storage
// =============================================================================

#[tokio::test]
async fn json_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let storage = FileSnapshotStorage::new(dir.path(), "taskmaster.json").unwrap();
    assert_eq!(storage.format(), SnapshotFormat::Json);
    round_trip(&storage).await;
}

#[tokio::test]
async fn yaml_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let storage = FileSnapshotStorage::new(dir.path().join("data"), "taskmaster.yaml").unwrap();
    assert_eq!(storage.format(), SnapshotFormat::Yaml);
    round_trip(&storage).await;
}

#[tokio::test]
async fn saved_json_uses_plain_values() {
    let dir = TempDir::new().unwrap();
    let storage = FileSnapshotStorage::new(dir.path(), "taskmaster.json").unwrap();
    storage.save(&populated_model().snapshot()).await.unwrap();

    let content = tokio::fs::read_to_string(storage.file_path()).await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["students"][0]["nusnet_id"], "E0000111");
    let week_1 = json["sessions"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["name"] == "Week 1")
        .unwrap();
    assert_eq!(week_1["records"][0]["attendance_type"], "PRESENT");
    assert_eq!(week_1["records"][0]["score"], 6);
}

#[tokio::test]
async fn invalid_values_in_file_are_rejected() {
    let dir = TempDir::new().unwrap();
    let storage = FileSnapshotStorage::new(dir.path(), "taskmaster.json").unwrap();
    let content = r#"{
        "students": [],
        "sessions": [{
            "name": "Week 1",
            "created_at": "2024-01-01T00:00:00Z",
            "records": [{ "nusnet_id": "E0000111", "attendance_type": "PRESENT", "score": 42 }]
        }]
    }"#;
    tokio::fs::write(storage.file_path(), content).await.unwrap();

    assert!(matches!(
        storage.load().await,
        Err(SnapshotStorageError::DeserializationFailed(_))
    ));
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        FileSnapshotStorage::new(dir.path(), "taskmaster.csv"),
        Err(SnapshotStorageError::UnsupportedFormat(_))
    ));
}

// =============================================================================
// In-memory storage
// =============================================================================

#[tokio::test]
async fn in_memory_round_trip() {
    let storage = InMemorySnapshotStorage::new();
    round_trip(&storage).await;
    assert_eq!(storage.save_count().await, 1);
}

// =============================================================================
// Repeated start-up
// =============================================================================

/// Loads whatever is stored (or starts empty), then saves it straight back.
async fn start_and_save(storage: &impl SnapshotStorage) -> Vec<String> {
    let model = match storage.load().await.unwrap() {
        Some(snapshot) => ModelManager::new(&snapshot, SessionDefaults::default()).unwrap(),
        None => ModelManager::with_defaults(SessionDefaults::default()),
    };
    storage.save(&model.snapshot()).await.unwrap();
    model
        .taskmaster()
        .sessions()
        .iter()
        .map(|s| s.name().to_string())
        .collect()
}

#[tokio::test]
async fn restarting_without_changes_keeps_session_history() {
    let storage = InMemorySnapshotStorage::new();
    start_and_save(&storage).await;
    let second = start_and_save(&storage).await;
    let third = start_and_save(&storage).await;

    assert_eq!(second, vec!["Default session", "Placeholder session"]);
    assert_eq!(third, second);
}

#[tokio::test]
async fn restarting_after_marking_adds_fresh_placeholder() {
    let dir = TempDir::new().unwrap();
    let storage = FileSnapshotStorage::new(dir.path(), "taskmaster.json").unwrap();
    storage.save(&populated_model().snapshot()).await.unwrap();

    let first = start_and_save(&storage).await;
    assert_eq!(first.last().map(String::as_str), Some("Placeholder session"));

    let loaded = storage.load().await.unwrap().unwrap();
    let mut model = ModelManager::new(&loaded, SessionDefaults::default()).unwrap();
    model
        .mark_student_by_identity(&NusnetId::new("E0000111").unwrap(), AttendanceType::Present)
        .unwrap();
    storage.save(&model.snapshot()).await.unwrap();

    let second = start_and_save(&storage).await;
    assert_eq!(second.len(), first.len() + 1);
    assert_eq!(second.last().map(String::as_str), Some("Placeholder session 2"));
}
