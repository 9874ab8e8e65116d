//! Observer that records what it saw, for assertions in tests.

use std::sync::{Mutex, PoisonError};

use crate::domain::foundation::NusnetId;
use crate::domain::taskmaster::{ActiveSession, ModelEvent};
use crate::domain::view::ReadOnlyModel;
use crate::ports::ModelObserver;

/// One notification together with the view state at delivery time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedEvent {
    pub event: ModelEvent,
    pub active_session: ActiveSession,
    pub record_ids: Vec<NusnetId>,
    pub student_count: usize,
    pub session_count: usize,
}

/// Captures every notification it receives.
///
/// # Example
///
/// ```ignore
/// let recorder = Arc::new(RecordingObserver::new());
/// model.subscribe(recorder.clone());
/// model.change_session(Some(&name))?;
/// assert_eq!(recorder.event_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct RecordingObserver {
    observed: Mutex<Vec<ObservedEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything observed so far, oldest first.
    pub fn observed(&self) -> Vec<ObservedEvent> {
        self.observed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns only the events, oldest first.
    pub fn events(&self) -> Vec<ModelEvent> {
        self.observed().into_iter().map(|o| o.event).collect()
    }

    pub fn event_count(&self) -> usize {
        self.observed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Forgets everything observed so far.
    pub fn clear(&self) {
        self.observed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl ModelObserver for RecordingObserver {
    fn on_event(&self, event: &ModelEvent, model: &dyn ReadOnlyModel) {
        let observed = ObservedEvent {
            event: event.clone(),
            active_session: model.current_session().clone(),
            record_ids: model
                .filtered_records()
                .iter()
                .map(|r| r.nusnet_id().clone())
                .collect(),
            student_count: model.filtered_students().len(),
            session_count: model.filtered_sessions().len(),
        };
        self.observed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(observed);
    }

    fn name(&self) -> &'static str {
        "RecordingObserver"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ModelManager;
    use std::sync::Arc;

    #[test]
    fn records_events_with_view_state() {
        let recorder = Arc::new(RecordingObserver::new());
        let mut model = ModelManager::default();
        model.subscribe(recorder.clone());

        model.change_session(None).unwrap();

        let observed = recorder.observed();
        assert_eq!(observed.len(), 1);
        assert_eq!(observed[0].active_session, ActiveSession::NoSessionSelected);
        assert!(observed[0].record_ids.is_empty());
        assert_eq!(observed[0].session_count, 1);

        recorder.clear();
        assert_eq!(recorder.event_count(), 0);
    }
}
