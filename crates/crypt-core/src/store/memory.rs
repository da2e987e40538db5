//! In-memory backend.
//!
//! Holds the serialized document in memory, so it goes through the same
//! JSON encoding as the file backend without touching the filesystem.

use std::cell::{Cell, RefCell};

use super::{Store, StoreBackend};
use crate::error::{CryptError, Result};

#[derive(Debug, Default)]
pub struct MemoryBackend {
    document: RefCell<Option<String>>,
    fail_saves: Cell<bool>,
    saves: Cell<usize>,
}

impl MemoryBackend {
    /// A backend with no document yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose document already holds `json`.
    pub fn with_document(json: impl Into<String>) -> Self {
        let backend = Self::new();
        backend.document.replace(Some(json.into()));
        backend
    }

    /// The currently persisted document, if any.
    pub fn document(&self) -> Option<String> {
        self.document.borrow().clone()
    }

    /// Make subsequent saves fail with a persistence error.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl StoreBackend for MemoryBackend {
    fn load(&self) -> Result<Store> {
        match self.document.borrow().as_deref() {
            None => Ok(Store::new()),
            Some(json) => serde_json::from_str(json).map_err(|e| {
                CryptError::Persistence(format!("Store <memory> is corrupt: {}", e))
            }),
        }
    }

    fn save(&self, store: &Store) -> Result<()> {
        if self.fail_saves.get() {
            return Err(CryptError::Persistence(
                "Failed to write store <memory>: simulated failure".to_string(),
            ));
        }
        let json = serde_json::to_string_pretty(store)?;
        self.document.replace(Some(json));
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
