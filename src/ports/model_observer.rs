//! ModelObserver port - Interface for display-side consumers of the model.
//!
//! Observers are notified synchronously, inside the mutating call, once the
//! change and any view rebinding it implies have completed. They receive a
//! read-only handle and can never mutate the model.

use crate::domain::taskmaster::ModelEvent;
use crate::domain::view::ReadOnlyModel;

/// Receiver of model change notifications.
///
/// Implementations should be:
/// - **Quick** - Notification runs on the caller's stack
/// - **Read-only** - The model handle exposes filtered views only
///
/// # Example
///
/// ```ignore
/// struct RecordCounter;
///
/// impl ModelObserver for RecordCounter {
///     fn on_event(&self, event: &ModelEvent, model: &dyn ReadOnlyModel) {
///         println!("{}: {} records", event.event_type(), model.filtered_records().len());
///     }
///
///     fn name(&self) -> &'static str {
///         "RecordCounter"
///     }
/// }
/// ```
pub trait ModelObserver: Send + Sync {
    /// Handle a completed change.
    fn on_event(&self, event: &ModelEvent, model: &dyn ReadOnlyModel);

    /// Observer name for logging.
    fn name(&self) -> &'static str;
}
