//! Configuration management for flat-auth
//!
//! Settings are layered: built-in defaults, an optional `flat-auth.toml` in the
//! working directory, then `FLAT_AUTH_*` environment variables.

use config::{Config, ConfigError, Environment, File, Source};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Base name of the optional configuration file (`flat-auth.toml`)
pub const CONFIG_FILE: &str = "flat-auth";

/// Environment variable prefix, e.g. `FLAT_AUTH_USER_DATA_FILE`
pub const ENV_PREFIX: &str = "FLAT_AUTH";

/// Default location of the credential file
pub const DEFAULT_USER_DATA_FILE: &str = "backend/users.txt";

/// Credential store configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Path of the line-delimited credential file
    pub user_data_file: String,

    /// Create missing parent directories on first write
    pub create_parent_dirs: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            user_data_file: DEFAULT_USER_DATA_FILE.to_string(),
            create_parent_dirs: true,
        }
    }
}

impl AuthConfig {
    /// Load configuration from the optional `flat-auth.toml` with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(File::with_name(CONFIG_FILE).required(false))
    }

    /// Load configuration from an explicit file with environment overrides
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::build(File::from(path))
    }

    fn build<S>(file: S) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let defaults = AuthConfig::default();
        let settings = Config::builder()
            .set_default("user_data_file", defaults.user_data_file)?
            .set_default("create_parent_dirs", defaults.create_parent_dirs)?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let config: AuthConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the credential file path, e.g. from a command-line flag
    pub fn with_user_data_file(mut self, path: impl Into<String>) -> Self {
        self.user_data_file = path.into();
        self
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.user_data_file.trim().is_empty() {
            return Err(ConfigError::Message(
                "user_data_file cannot be empty".into(),
            ));
        }

        Ok(())
    }

    /// Get the credential file as PathBuf
    pub fn user_data_path(&self) -> PathBuf {
        PathBuf::from(&self.user_data_file)
    }
}
