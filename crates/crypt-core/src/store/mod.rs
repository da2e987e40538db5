//! Record store for Crypt.
//!
//! The store is a mapping from record name to [`Record`], persisted as a
//! single JSON document:
//!
//! ```json
//! {
//!   "notes.txt": { "data": "<base64>", "hint": "my favorite", "passHash": "<digest>" }
//! }
//! ```
//!
//! [`Store`] is a plain value: load it through a [`StoreBackend`], mutate it,
//! and save it back. Nothing here is global, so operations can be tested
//! against an in-memory store.
//!
//! ## Concurrency
//!
//! There is no locking. Two processes that load, mutate and save the same
//! document race, and the last save wins; the other update is lost. Crypt
//! is meant to be driven by one process at a time.

pub mod backend;
pub mod json_file;
pub mod memory;
pub mod record;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CryptError, Result};

pub use crate::crypto::Scheme;
pub use backend::StoreBackend;
pub use json_file::JsonFileBackend;
pub use memory::MemoryBackend;
pub use record::{Listing, Record};

/// In-memory view of the store document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Store {
    records: BTreeMap<String, Record>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Record names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Look up a record.
    ///
    /// # Errors
    ///
    /// Returns `CryptError::NotFound` if no record has this name.
    pub fn get(&self, name: &str) -> Result<&Record> {
        self.records
            .get(name)
            .ok_or_else(|| CryptError::NotFound(name.to_string()))
    }

    /// Insert or overwrite a record, returning the one it displaced.
    pub fn put(&mut self, name: impl Into<String>, record: Record) -> Option<Record> {
        self.records.insert(name.into(), record)
    }

    /// Remove a record.
    ///
    /// # Errors
    ///
    /// Returns `CryptError::NotFound` if no record has this name.
    pub fn remove(&mut self, name: &str) -> Result<Record> {
        self.records
            .remove(name)
            .ok_or_else(|| CryptError::NotFound(name.to_string()))
    }

    /// Move the record at `old` to `new`.
    ///
    /// An existing record at `new` is overwritten and returned. Renaming a
    /// record onto itself changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `CryptError::NotFound` if `old` is absent; the store is left
    /// unchanged.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<Option<Record>> {
        if !self.records.contains_key(old) {
            return Err(CryptError::NotFound(old.to_string()));
        }
        if old == new {
            return Ok(None);
        }
        let record = self.remove(old)?;
        Ok(self.put(new, record))
    }

    /// `(name, hint)` rows sorted by name.
    pub fn list(&self) -> Vec<Listing> {
        self.records
            .iter()
            .map(|(name, record)| Listing {
                name: name.clone(),
                hint: record.hint.clone(),
                scheme: record.scheme,
            })
            .collect()
    }
}
