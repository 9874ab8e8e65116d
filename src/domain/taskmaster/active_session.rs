//! Active-session state of the aggregate root.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::SessionName;

/// Which session, if any, mark/score operations currently target.
///
/// Transitions happen only through `change_session`; any state can move
/// to any other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "session")]
pub enum ActiveSession {
    NoSessionSelected,
    SessionActive(SessionName),
}

impl ActiveSession {
    /// Returns the active session's name, if any.
    pub fn name(&self) -> Option<&SessionName> {
        match self {
            ActiveSession::NoSessionSelected => None,
            ActiveSession::SessionActive(name) => Some(name),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, ActiveSession::SessionActive(_))
    }
}

impl From<Option<SessionName>> for ActiveSession {
    fn from(name: Option<SessionName>) -> Self {
        match name {
            Some(name) => ActiveSession::SessionActive(name),
            None => ActiveSession::NoSessionSelected,
        }
    }
}

impl fmt::Display for ActiveSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActiveSession::NoSessionSelected => write!(f, "no session selected"),
            ActiveSession::SessionActive(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_option_maps_both_states() {
        let name = SessionName::new("Lab").unwrap();
        assert_eq!(
            ActiveSession::from(Some(name.clone())),
            ActiveSession::SessionActive(name.clone())
        );
        assert_eq!(ActiveSession::from(None), ActiveSession::NoSessionSelected);
    }

    #[test]
    fn name_and_is_active() {
        let name = SessionName::new("Lab").unwrap();
        let active = ActiveSession::SessionActive(name.clone());
        assert_eq!(active.name(), Some(&name));
        assert!(active.is_active());
        assert_eq!(ActiveSession::NoSessionSelected.name(), None);
        assert!(!ActiveSession::NoSessionSelected.is_active());
    }

    #[test]
    fn display_works_correctly() {
        assert_eq!(ActiveSession::NoSessionSelected.to_string(), "no session selected");
        let active = ActiveSession::SessionActive(SessionName::new("Tutorial 4").unwrap());
        assert_eq!(active.to_string(), "Tutorial 4");
    }
}
