//! Observer Adapters
//!
//! Implementations of the ModelObserver port.
//!
//! - **LoggingObserver** - Traces every model event
//! - **RecordingObserver** - Captures events and view state (testing)

mod logging;
mod recording;

pub use logging::LoggingObserver;
pub use recording::{ObservedEvent, RecordingObserver};
