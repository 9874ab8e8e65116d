//! Session naming configuration

use serde::Deserialize;

use crate::domain::foundation::SessionName;
use crate::domain::taskmaster::SessionDefaults;

use super::error::ValidationError;

/// Names of the sessions the model creates on its own
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Session created and activated by an empty model
    #[serde(default = "default_session_name")]
    pub default_session_name: String,

    /// Session created and activated after loading or resetting data
    #[serde(default = "placeholder_session_name")]
    pub placeholder_session_name: String,
}

impl SessionConfig {
    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.to_defaults().map(|_| ())
    }

    /// Converts the configured names into domain values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a name is blank or too long, or if both
    /// names are the same
    pub fn to_defaults(&self) -> Result<SessionDefaults, ValidationError> {
        let default_session_name =
            parse_name("session.default_session_name", &self.default_session_name)?;
        let placeholder_session_name =
            parse_name("session.placeholder_session_name", &self.placeholder_session_name)?;
        if default_session_name == placeholder_session_name {
            return Err(ValidationError::SessionNamesCollide);
        }
        Ok(SessionDefaults {
            default_session_name,
            placeholder_session_name,
        })
    }
}

fn parse_name(field: &'static str, raw: &str) -> Result<SessionName, ValidationError> {
    SessionName::new(raw).map_err(|e| ValidationError::InvalidSessionName {
        field,
        reason: e.to_string(),
    })
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_session_name: default_session_name(),
            placeholder_session_name: placeholder_session_name(),
        }
    }
}

fn default_session_name() -> String {
    "Default session".to_string()
}

fn placeholder_session_name() -> String {
    "Placeholder session".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_domain_defaults() {
        let defaults = SessionConfig::default().to_defaults().unwrap();
        assert_eq!(defaults, SessionDefaults::default());
    }

    #[test]
    fn test_blank_name_rejected() {
        let config = SessionConfig {
            default_session_name: "   ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidSessionName {
                field: "session.default_session_name",
                ..
            })
        ));
    }

    #[test]
    fn test_identical_names_rejected() {
        let config = SessionConfig {
            default_session_name: "Week 1".to_string(),
            placeholder_session_name: "Week 1".to_string(),
        };
        assert_eq!(config.validate(), Err(ValidationError::SessionNamesCollide));
    }
}
