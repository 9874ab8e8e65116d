//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TASKMASTER` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a usable config.
//!
//! # Example
//!
//! ```no_run
//! use taskmaster::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! config.validate()?;
//!
//! println!("Snapshot file: {}", config.storage.snapshot_path().display());
//! # Ok::<(), taskmaster::config::ConfigError>(())
//! ```

mod error;
mod logging;
mod session;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use session::SessionConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

use crate::domain::taskmaster::SessionDefaults;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Snapshot location and format
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log level and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Names of automatically created sessions
    #[serde(default)]
    pub session: SessionConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TASKMASTER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TASKMASTER__STORAGE__DATA_DIR=/var/lib/taskmaster` -> `storage.data_dir`
    /// - `TASKMASTER__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TASKMASTER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.logging.validate()?;
        self.session.validate()?;
        Ok(())
    }

    /// Session names for the model
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the configured names are invalid.
    pub fn session_defaults(&self) -> Result<SessionDefaults, ValidationError> {
        self.session.to_defaults()
    }
}
