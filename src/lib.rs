pub mod auth;
pub mod config;
pub mod error;
pub mod storage;

pub use auth::{AuthService, SharedAuthService, hash_password};
pub use config::AuthConfig;
pub use error::{AuthError, StoreError};
pub use storage::{CredentialRecord, CredentialStore};
