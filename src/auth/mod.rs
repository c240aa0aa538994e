//! Authentication system
//!
//! Password hashing plus the signup/login service built on the credential store.

pub mod hasher;
pub mod service;
pub mod shared;

pub use hasher::hash_password;
pub use service::AuthService;
pub use shared::SharedAuthService;
