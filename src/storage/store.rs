//! File-backed record store
//!
//! Each named store is one JSON file under the root directory, holding either
//! a flat sequence of records or a single record (the session). Every read
//! fetches the whole collection and every write replaces it wholesale; there
//! is no indexing, no query language, and no partial-write guarantee. Callers
//! must compute the full next state before writing.

use crate::error::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Durable mapping from a store name to a JSON-serialized collection,
/// surviving process restarts
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory. The directory is
    /// created on first write, not here.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }

    /// Read the persisted sequence for `name`. A store with no content yet
    /// yields an empty sequence.
    pub fn read_all<T>(&self, name: &str) -> Result<Vec<T>>
    where
        T: Serialize + DeserializeOwned,
    {
        self.read_all_or_seed(name, Vec::new)
    }

    /// Read the persisted sequence for `name`, seeding on first access.
    ///
    /// If nothing is persisted yet, `seed` is invoked, its result persisted
    /// and returned. If the persisted content fails to parse, the store is
    /// reset to an empty sequence; corruption is recovered locally, never
    /// surfaced.
    pub fn read_all_or_seed<T, F>(&self, name: &str, seed: F) -> Result<Vec<T>>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Vec<T>,
    {
        let path = self.path_for(name);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let records = seed();
                if !records.is_empty() {
                    tracing::info!(store = name, count = records.len(), "seeding store");
                }
                self.write_all(name, &records)?;
                return Ok(records);
            },
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                tracing::warn!(store = name, error = %e, "unparsable store content, resetting to empty");
                let empty: Vec<T> = Vec::new();
                self.write_all(name, &empty)?;
                Ok(empty)
            },
        }
    }

    /// Replace the entire stored sequence for `name`
    pub fn write_all<T: Serialize>(&self, name: &str, records: &[T]) -> Result<()> {
        self.write_raw(name, &serde_json::to_string_pretty(records)?)
    }

    /// Read a single-record store. Absent or unparsable content yields
    /// `None`; unparsable content also clears the store.
    pub fn read_one<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let path = self.path_for(name);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                tracing::warn!(store = name, error = %e, "unparsable store content, clearing");
                self.clear(name)?;
                Ok(None)
            },
        }
    }

    /// Write a single-record store, replacing any previous record
    pub fn write_one<T: Serialize>(&self, name: &str, record: &T) -> Result<()> {
        self.write_raw(name, &serde_json::to_string_pretty(record)?)
    }

    /// Remove the store's content entirely. Removing an absent store is not
    /// an error.
    pub fn clear(&self, name: &str) -> Result<()> {
        match fs::remove_file(self.path_for(name)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_raw(&self, name: &str, payload: &str) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        tracing::debug!(store = name, bytes = payload.len(), "writing store");
        fs::write(self.path_for(name), payload)?;
        Ok(())
    }
}
