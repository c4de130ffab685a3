//! Password Store for SecurePass.
//!
//! Keeps saved passwords as a pretty-printed JSON array of
//! `{"password", "timestamp"}` objects in a single file. Every save reads the
//! whole file, appends one record and rewrites the file. There is no locking,
//! so two processes saving at once can lose a record.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::types::errors::StoreError;
use crate::types::password::{History, HistoryStatus, PasswordRecord};

/// Trait defining password history operations.
pub trait PasswordStoreTrait {
    fn append(&self, password: &str) -> Result<(), StoreError>;
    fn list(&self) -> Vec<PasswordRecord>;
    fn load_history(&self) -> History;
    fn path(&self) -> &Path;
}

/// History store backed by one JSON file.
pub struct PasswordStore {
    path: PathBuf,
}

enum ReadOutcome<T> {
    Missing,
    Parsed(T),
    Corrupt(String),
}

impl PasswordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Appends a record stamped with `saved_at` instead of the current time.
    ///
    /// Existing entries are kept as raw JSON and written back untouched, so
    /// any array that parses survives a save even if some of its entries are
    /// not well-formed records.
    pub fn append_at(&self, password: &str, saved_at: &NaiveDateTime) -> Result<(), StoreError> {
        if password.is_empty() {
            return Err(StoreError::EmptyInput);
        }

        let mut entries = match self.read_as::<Vec<Value>>() {
            Ok(ReadOutcome::Parsed(entries)) => entries,
            Ok(ReadOutcome::Missing) => Vec::new(),
            Ok(ReadOutcome::Corrupt(reason)) => {
                warn!(
                    path = %self.path.display(),
                    %reason,
                    "discarding unparsable password history"
                );
                Vec::new()
            }
            Err(e) => {
                return Err(StoreError::Io(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let record = serde_json::to_value(PasswordRecord::new(password, saved_at))
            .map_err(|e| StoreError::Serialization(format!("Failed to encode record: {}", e)))?;
        entries.push(record);
        self.write_entries(&entries)?;

        info!(count = entries.len(), "password saved");
        Ok(())
    }

    fn read_as<T: DeserializeOwned>(&self) -> std::io::Result<ReadOutcome<T>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(ReadOutcome::Missing),
            Err(e) => return Err(e),
        };

        Ok(match serde_json::from_slice::<T>(&bytes) {
            Ok(parsed) => ReadOutcome::Parsed(parsed),
            Err(e) => ReadOutcome::Corrupt(e.to_string()),
        })
    }

    fn write_entries(&self, entries: &[Value]) -> Result<(), StoreError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        entries
            .serialize(&mut serializer)
            .map_err(|e| StoreError::Serialization(format!("Failed to encode records: {}", e)))?;

        fs::write(&self.path, buf).map_err(|e| {
            StoreError::Io(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

impl PasswordStoreTrait for PasswordStore {
    /// Saves `password` with the current local time.
    ///
    /// An existing file that is not a JSON array is replaced by a file
    /// holding only the new record.
    fn append(&self, password: &str) -> Result<(), StoreError> {
        self.append_at(password, &Local::now().naive_local())
    }

    /// Returns saved records in save order. Missing, unreadable and
    /// unparsable files all read as empty.
    fn list(&self) -> Vec<PasswordRecord> {
        self.load_history().records
    }

    fn load_history(&self) -> History {
        let (records, status) = match self.read_as::<Vec<PasswordRecord>>() {
            Ok(ReadOutcome::Parsed(records)) => (records, HistoryStatus::Loaded),
            Ok(ReadOutcome::Missing) => (Vec::new(), HistoryStatus::Missing),
            Ok(ReadOutcome::Corrupt(reason)) => {
                warn!(path = %self.path.display(), %reason, "password history is not valid JSON");
                (Vec::new(), HistoryStatus::Corrupt)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read password history");
                (Vec::new(), HistoryStatus::Unreadable)
            }
        };

        debug!(count = records.len(), ?status, "loaded password history");
        History { records, status }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
