//! Async facade over the blocking auth service
//!
//! Each call runs on tokio's blocking pool so file I/O never stalls the runtime.

use std::sync::Arc;

use super::service::AuthService;
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::error::handlers::to_bool;

/// Cloneable handle sharing one `AuthService` (and its writer lock) across tasks
#[derive(Debug, Clone)]
pub struct SharedAuthService {
    inner: Arc<AuthService>,
}

impl SharedAuthService {
    pub fn new(service: AuthService) -> Self {
        Self {
            inner: Arc::new(service),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(AuthService::from_config(config))
    }

    pub fn service(&self) -> &AuthService {
        &self.inner
    }

    pub async fn signup(&self, username: &str, password: &str) -> bool {
        let result = self
            .run(username, password, |auth, u, p| {
                auth.try_signup(&u, &p).map(|_| true)
            })
            .await;
        to_bool("signup", result)
    }

    pub async fn login(&self, username: &str, password: &str) -> bool {
        let result = self
            .run(username, password, |auth, u, p| auth.try_login(&u, &p))
            .await;
        to_bool("login", result)
    }

    pub async fn user_exists(&self, username: &str) -> bool {
        let result = self
            .run(username, "", |auth, u, _| auth.try_user_exists(&u))
            .await;
        to_bool("user_exists", result)
    }

    async fn run<F>(&self, username: &str, password: &str, op: F) -> Result<bool, AuthError>
    where
        F: FnOnce(&AuthService, String, String) -> Result<bool, AuthError> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        let username = username.to_string();
        let password = password.to_string();
        tokio::task::spawn_blocking(move || op(&inner, username, password)).await?
    }
}
