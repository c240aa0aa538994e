//! Error types
//!
//! Defines domain-specific error types for the credential store and the auth service.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Credential store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line} of {} is not valid UTF-8", .path.display())]
    InvalidUtf8 { path: PathBuf, line: usize },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Authentication service errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("background auth task failed: {0}")]
    Join(String),
}

impl From<tokio::task::JoinError> for AuthError {
    fn from(error: tokio::task::JoinError) -> Self {
        AuthError::Join(error.to_string())
    }
}
