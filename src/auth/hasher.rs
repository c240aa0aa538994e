//! Password hashing
//!
//! SHA-256 over the UTF-8 password bytes, encoded as standard padded base64.
//! No per-user salt: equal passwords always hash equally.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha256};

/// Length of an encoded hash (32 digest bytes in padded base64)
pub const HASH_LEN: usize = 44;

/// Hashes a password into its stored text form.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    STANDARD.encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest() {
        assert_eq!(
            hash_password(""),
            "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU="
        );
        assert_eq!(
            hash_password("abc"),
            "ungWv48Bz+pBQUDeXa4iI7ADYaOWF3qctBD/YfIAFa0="
        );
    }

    #[test]
    fn test_deterministic_and_distinct() {
        assert_eq!(hash_password("pw1"), hash_password("pw1"));
        assert_ne!(hash_password("pw1"), hash_password("pw2"));
        assert_eq!(hash_password("pw1").len(), HASH_LEN);
    }
}
