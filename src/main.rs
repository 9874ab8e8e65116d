use std::error::Error;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use taskmaster::adapters::{FileSnapshotStorage, LoggingObserver};
use taskmaster::application::ModelManager;
use taskmaster::config::{AppConfig, LoggingConfig};
use taskmaster::domain::taskmaster::ReadOnlyTaskmaster;
use taskmaster::ports::SnapshotStorage;

fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directive()));

    tracing_subscriber::registry()
        .with(filter)
        .with(config.json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!config.json).then(|| tracing_subscriber::fmt::layer()))
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    let storage =
        FileSnapshotStorage::new(&config.storage.data_dir, &config.storage.snapshot_file)?;
    let defaults = config.session_defaults()?;

    let mut model = match storage.load().await? {
        Some(snapshot) => {
            tracing::info!(path = %storage.file_path().display(), "Snapshot loaded");
            ModelManager::new(&snapshot, defaults)?
        }
        None => {
            tracing::info!(
                path = %storage.file_path().display(),
                "No snapshot found, starting empty"
            );
            ModelManager::with_defaults(defaults)
        }
    };
    model.subscribe(Arc::new(LoggingObserver::new()));

    let taskmaster = model.taskmaster();
    tracing::info!(
        students = taskmaster.students().len(),
        sessions = taskmaster.sessions().len(),
        active_session = %taskmaster.current_session(),
        "Taskmaster ready"
    );

    storage.save(&model.snapshot()).await?;
    tracing::info!(path = %storage.file_path().display(), "Snapshot saved");

    Ok(())
}
