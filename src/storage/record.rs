//! Credential record format
//!
//! One record per line: `<username>,<password_hash>`. Nothing is escaped, so a
//! username containing a comma or newline cannot round-trip.

use std::fmt;

/// Field delimiter within a record line
pub const FIELD_DELIMITER: char = ',';

/// One stored username/password-hash pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub username: String,
    pub password_hash: String,
}

impl CredentialRecord {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Parses a stored line. Fields past the second are ignored.
    ///
    /// Returns `None` for a malformed line: no delimiter, or an empty hash field.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let mut fields = line.split(FIELD_DELIMITER);
        let username = fields.next()?;
        let password_hash = fields.next()?;

        if password_hash.is_empty() {
            return None;
        }

        Some(Self::new(username, password_hash))
    }

    /// Whether this record matches both the username and the hash
    pub fn matches(&self, username: &str, password_hash: &str) -> bool {
        self.username == username && self.password_hash == password_hash
    }

    /// The line as written to disk, including the trailing newline
    pub fn to_line(&self) -> String {
        format!("{}\n", self)
    }
}

impl fmt::Display for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.username, FIELD_DELIMITER, self.password_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_line() {
        let record = CredentialRecord::parse("alice,abc=").unwrap();
        assert_eq!(record.username, "alice");
        assert_eq!(record.password_hash, "abc=");
    }

    #[test]
    fn test_parse_strips_carriage_return() {
        let record = CredentialRecord::parse("alice,abc=\r").unwrap();
        assert_eq!(record.password_hash, "abc=");
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let record = CredentialRecord::parse("alice,abc=,trailing").unwrap();
        assert_eq!(record, CredentialRecord::new("alice", "abc="));
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        assert_eq!(CredentialRecord::parse(""), None);
        assert_eq!(CredentialRecord::parse("alice"), None);
        assert_eq!(CredentialRecord::parse("alice,"), None);
    }

    #[test]
    fn test_to_line() {
        let record = CredentialRecord::new("bob", "xyz=");
        assert_eq!(record.to_line(), "bob,xyz=\n");
        assert!(record.matches("bob", "xyz="));
        assert!(!record.matches("bob", "other"));
    }
}
