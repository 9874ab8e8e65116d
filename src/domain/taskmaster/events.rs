//! Change notifications delivered to model observers.
//!
//! Events are raised after a mutation, and any view rebinding it implies,
//! has fully completed:
//! - `StudentsChanged` - Roster edited
//! - `SessionsChanged` - Session history edited
//! - `RecordsChanged` - Records of one session marked, scored or cleared
//! - `ActiveSessionChanged` - Active session switched
//! - `DataReset` - Whole model replaced from a snapshot

use serde::Serialize;

use crate::domain::foundation::SessionName;

/// A completed change to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModelEvent {
    StudentsChanged,
    SessionsChanged,
    RecordsChanged {
        session: SessionName,
    },
    ActiveSessionChanged {
        previous: Option<SessionName>,
        current: Option<SessionName>,
    },
    DataReset,
}

impl ModelEvent {
    /// Dotted event name used in logs.
    pub fn event_type(&self) -> &'static str {
        match self {
            ModelEvent::StudentsChanged => "students.changed",
            ModelEvent::SessionsChanged => "sessions.changed",
            ModelEvent::RecordsChanged { .. } => "records.changed",
            ModelEvent::ActiveSessionChanged { .. } => "session.switched",
            ModelEvent::DataReset => "data.reset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_names() {
        assert_eq!(ModelEvent::StudentsChanged.event_type(), "students.changed");
        assert_eq!(
            ModelEvent::ActiveSessionChanged {
                previous: None,
                current: None
            }
            .event_type(),
            "session.switched"
        );
    }

    #[test]
    fn serializes_with_type_tag() {
        let event = ModelEvent::RecordsChanged {
            session: SessionName::new("Lab 1").unwrap(),
        };
        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"{"type":"records_changed","session":"Lab 1"}"#
        );
    }
}
