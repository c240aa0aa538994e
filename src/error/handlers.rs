//! Error handlers
//!
//! Collapses internal errors into the boolean results of the public API.

use log::error;

use crate::error::types::AuthError;

/// Log an auth error raised while running `operation`.
pub fn handle_error(operation: &str, err: &AuthError) {
    error!("{} failed: {}", operation, err);
}

/// Converts an operation result into the boolean contract, logging failures.
pub fn to_bool(operation: &str, result: Result<bool, AuthError>) -> bool {
    match result {
        Ok(value) => value,
        Err(err) => {
            handle_error(operation, &err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use std::io;

    #[test]
    fn test_to_bool_passes_through_ok() {
        assert!(to_bool("login", Ok(true)));
        assert!(!to_bool("login", Ok(false)));
    }

    #[test]
    fn test_to_bool_maps_errors_to_false() {
        let err = AuthError::from(StoreError::io(
            "users.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        ));
        assert!(!to_bool("signup", Err(err)));
    }
}
