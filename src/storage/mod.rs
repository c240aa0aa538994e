//! Credential storage
//!
//! Owns the on-disk record format and the flat-file store.

pub mod record;
pub mod store;

pub use record::CredentialRecord;
pub use store::CredentialStore;
