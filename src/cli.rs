//! Command-line interface
//!
//! Parses arguments and drives the auth service.

use clap::{Parser, Subcommand};
use config::ConfigError;
use std::path::PathBuf;

use flat_auth::{AuthConfig, SharedAuthService, hash_password};

/// Exit status when the operation returned true
pub const EXIT_OK: u8 = 0;

/// Exit status when the operation returned false
pub const EXIT_DENIED: u8 = 1;

/// Exit status for unusable configuration
pub const EXIT_CONFIG: u8 = 2;

/// Maps an operation outcome to the process exit status
pub fn exit_status(ok: bool) -> u8 {
    if ok { EXIT_OK } else { EXIT_DENIED }
}

#[derive(Debug, Parser)]
#[command(name = "flat-auth", version, about = "Flat-file signup and login")]
pub struct Cli {
    /// Credential file, overriding flat-auth.toml and FLAT_AUTH_USER_DATA_FILE
    #[arg(long, short, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store a new credential
    Signup { username: String, password: String },
    /// Verify a credential
    Login { username: String, password: String },
    /// Check whether a username has been registered
    Exists { username: String },
    /// Print the stored hash for a password
    Hash { password: String },
}

impl Cli {
    /// Applies the `--file` override on top of loaded configuration, then
    /// validates the result since the override bypasses the loader's checks
    pub fn resolve_config(
        &self,
        loaded: Result<AuthConfig, ConfigError>,
    ) -> Result<AuthConfig, ConfigError> {
        let config = match &self.file {
            Some(path) => loaded?.with_user_data_file(path.to_string_lossy()),
            None => loaded?,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Runs the command, returning the boolean outcome and the text to print
pub async fn execute(command: Command, auth: &SharedAuthService) -> (bool, String) {
    match command {
        Command::Signup { username, password } => {
            let ok = auth.signup(&username, &password).await;
            (ok, if ok { "ok" } else { "failed" }.to_string())
        }
        Command::Login { username, password } => {
            let ok = auth.login(&username, &password).await;
            (ok, if ok { "ok" } else { "denied" }.to_string())
        }
        Command::Exists { username } => {
            let ok = auth.user_exists(&username).await;
            (ok, if ok { "yes" } else { "no" }.to_string())
        }
        Command::Hash { password } => (true, hash_password(&password)),
    }
}
