//! Authentication service
//!
//! Hashes passwords and mediates between callers and the credential store. The
//! boolean methods are the public contract: every failure becomes `false`. The
//! `try_*` methods expose the underlying error for diagnostics.

use log::{debug, info};

use super::hasher::hash_password;
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::error::handlers::to_bool;
use crate::storage::CredentialStore;

/// Signup and login over a flat-file credential store
#[derive(Debug)]
pub struct AuthService {
    store: CredentialStore,
}

impl AuthService {
    pub fn new(store: CredentialStore) -> Self {
        Self { store }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(CredentialStore::from_config(config))
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    /// Password digest as stored in the credential file
    pub fn hash(&self, password: &str) -> String {
        hash_password(password)
    }

    /// Appends a new record. Existing usernames are not checked, so duplicates
    /// are allowed and login matches against every record with that name.
    pub fn signup(&self, username: &str, password: &str) -> bool {
        to_bool("signup", self.try_signup(username, password).map(|_| true))
    }

    pub fn try_signup(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let password_hash = self.hash(password);
        self.store.append(username, &password_hash)?;
        info!("Signed up user {}", username);
        Ok(())
    }

    pub fn login(&self, username: &str, password: &str) -> bool {
        to_bool("login", self.try_login(username, password))
    }

    pub fn try_login(&self, username: &str, password: &str) -> Result<bool, AuthError> {
        if !self.store.exists() {
            debug!("Login for {} rejected: no credential store", username);
            return Ok(false);
        }

        let password_hash = self.hash(password);
        let accepted = self.store.contains(username, &password_hash)?;
        debug!("Login for {}: {}", username, if accepted { "accepted" } else { "rejected" });
        Ok(accepted)
    }

    pub fn user_exists(&self, username: &str) -> bool {
        to_bool("user_exists", self.try_user_exists(username))
    }

    pub fn try_user_exists(&self, username: &str) -> Result<bool, AuthError> {
        Ok(self.store.find_by_username(username)?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn service_in(dir: &tempfile::TempDir) -> AuthService {
        AuthService::new(CredentialStore::new(dir.path().join("users.txt")))
    }

    #[test]
    fn test_signup_then_login() {
        let dir = tempfile::tempdir().unwrap();
        let auth = service_in(&dir);

        assert!(auth.signup("alice", "pw1"));
        assert!(auth.login("alice", "pw1"));
        assert!(!auth.login("alice", "wrong"));
        assert!(!auth.login("bob", "pw1"));
    }

    #[test]
    fn test_file_contents_after_signup() {
        let dir = tempfile::tempdir().unwrap();
        let auth = service_in(&dir);

        assert!(auth.signup("alice", "pw1"));
        let contents = fs::read_to_string(auth.store().path()).unwrap();
        assert_eq!(contents, format!("alice,{}\n", hash_password("pw1")));
    }

    #[test]
    fn test_login_without_store_is_false() {
        let dir = tempfile::tempdir().unwrap();
        let auth = service_in(&dir);

        assert!(!auth.login("alice", "pw1"));
        assert!(!auth.login("", ""));
        assert!(!auth.store().exists());
    }

    #[test]
    fn test_user_exists_before_and_after_signup() {
        let dir = tempfile::tempdir().unwrap();
        let auth = service_in(&dir);

        assert!(!auth.user_exists("alice"));
        assert!(auth.signup("alice", "pw1"));
        assert!(auth.user_exists("alice"));
        assert!(!auth.user_exists("bob"));
    }

    #[test]
    fn test_duplicate_signup_appends_again() {
        let dir = tempfile::tempdir().unwrap();
        let auth = service_in(&dir);

        assert!(auth.signup("alice", "pw1"));
        assert!(auth.signup("alice", "pw2"));

        assert_eq!(auth.store().records().unwrap().len(), 2);
        assert!(auth.login("alice", "pw1"));
        assert!(auth.login("alice", "pw2"));
    }

    #[test]
    fn test_signup_fails_when_store_unwritable() {
        let dir = tempfile::tempdir().unwrap();
        // The store path is an existing directory, so opening it for append fails
        let auth = AuthService::new(CredentialStore::new(dir.path()));

        assert!(!auth.signup("alice", "pw1"));
        assert!(auth.try_signup("alice", "pw1").is_err());
    }

    #[test]
    fn test_login_skips_malformed_lines() {
        let dir = tempfile::tempdir().unwrap();
        let auth = service_in(&dir);
        fs::write(
            auth.store().path(),
            format!("broken\nalice,{}\n", hash_password("pw1")),
        )
        .unwrap();

        assert!(auth.login("alice", "pw1"));
        assert!(!auth.user_exists("broken"));
    }
}
