//! Observer that traces every model change.

use tracing::info;

use crate::domain::taskmaster::ModelEvent;
use crate::domain::view::ReadOnlyModel;
use crate::ports::ModelObserver;

/// Writes one structured log line per model event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingObserver;

impl LoggingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl ModelObserver for LoggingObserver {
    fn on_event(&self, event: &ModelEvent, model: &dyn ReadOnlyModel) {
        info!(
            event_type = event.event_type(),
            active_session = %model.current_session(),
            students = model.filtered_students().len(),
            sessions = model.filtered_sessions().len(),
            records = model.filtered_records().len(),
            "Model changed"
        );
    }

    fn name(&self) -> &'static str {
        "LoggingObserver"
    }
}
