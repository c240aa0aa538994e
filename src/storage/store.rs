//! Flat-file credential store
//!
//! Reads and appends credential records in a line-oriented text file. Appends
//! made through one `CredentialStore` are serialized by a writer lock; separate
//! processes writing the same file are not coordinated.
//!
//! Appends never add a separating newline: if the file was edited by hand and
//! its last line lacks a trailing `\n`, the next record is joined onto it.

use log::{debug, warn};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::config::AuthConfig;
use crate::error::StoreError;
use crate::storage::record::CredentialRecord;

/// Durable storage of credential records as plain text
#[derive(Debug)]
pub struct CredentialStore {
    path: PathBuf,
    create_parent_dirs: bool,
    writer: Mutex<()>,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            create_parent_dirs: true,
            writer: Mutex::new(()),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            path: config.user_data_path(),
            create_parent_dirs: config.create_parent_dirs,
            writer: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file is present. An absent file is an empty store.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Appends one `username,password_hash` line, creating the file if missing.
    pub fn append(&self, username: &str, password_hash: &str) -> Result<(), StoreError> {
        let line = CredentialRecord::new(username, password_hash).to_line();
        let _guard = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if self.create_parent_dirs {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::io(&self.path, e))?;

        // Single write so the line lands in one append
        file.write_all(line.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| StoreError::io(&self.path, e))?;

        debug!("Appended record for {} to {}", username, self.path.display());
        Ok(())
    }

    /// First record in file order whose username matches.
    pub fn find_by_username(&self, username: &str) -> Result<Option<CredentialRecord>, StoreError> {
        self.find(|record| record.username == username)
    }

    /// Whether any record matches both username and hash.
    pub fn contains(&self, username: &str, password_hash: &str) -> Result<bool, StoreError> {
        Ok(self
            .find(|record| record.matches(username, password_hash))?
            .is_some())
    }

    /// All well-formed records in file order.
    pub fn records(&self) -> Result<Vec<CredentialRecord>, StoreError> {
        let mut records = Vec::new();
        self.scan(|record| {
            records.push(record);
            false
        })?;
        Ok(records)
    }

    fn find<P>(&self, mut predicate: P) -> Result<Option<CredentialRecord>, StoreError>
    where
        P: FnMut(&CredentialRecord) -> bool,
    {
        let mut found = None;
        self.scan(|record| {
            if predicate(&record) {
                found = Some(record);
                true
            } else {
                false
            }
        })?;
        Ok(found)
    }

    /// Visits records in order until `visit` returns true. Malformed lines are skipped.
    fn scan<F>(&self, mut visit: F) -> Result<(), StoreError>
    where
        F: FnMut(CredentialRecord) -> bool,
    {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Credential file {} not found, store is empty", self.path.display());
                return Ok(());
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        let reader = BufReader::new(file);
        for (index, chunk) in reader.split(b'\n').enumerate() {
            let line_no = index + 1;
            let bytes = chunk.map_err(|e| StoreError::io(&self.path, e))?;
            let line = String::from_utf8(bytes).map_err(|_| StoreError::InvalidUtf8 {
                path: self.path.clone(),
                line: line_no,
            })?;

            match CredentialRecord::parse(&line) {
                Some(record) => {
                    if visit(record) {
                        return Ok(());
                    }
                }
                None => warn!(
                    "Skipping malformed line {} in {}",
                    line_no,
                    self.path.display()
                ),
            }
        }

        Ok(())
    }
}
