//! Load/mutate/save driver around a [`StoreBackend`].
//!
//! Every mutating verb runs against a copy of the loaded store. The copy is
//! saved and only then adopted, so a failed save leaves both the document on
//! disk and the in-memory view as they were.

use std::path::Path;

use tracing::debug;
use zeroize::Zeroizing;

use crate::error::Result;
use crate::ops::{self, Settings, UpgradeOutcome};
use crate::prompt::Operator;
use crate::store::{Listing, Record, Store, StoreBackend};

/// An open store bound to its backend.
#[derive(Debug)]
pub struct Vault<B: StoreBackend> {
    backend: B,
    store: Store,
    settings: Settings,
}

impl<B: StoreBackend> Vault<B> {
    /// Load the store from `backend`.
    ///
    /// # Errors
    ///
    /// Returns `CryptError::Persistence` if an existing document cannot be
    /// read or parsed.
    pub fn open(backend: B, settings: Settings) -> Result<Self> {
        let store = backend.load()?;
        debug!(location = %backend.location(), records = store.len(), "opened vault");
        Ok(Self {
            backend,
            store,
            settings,
        })
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn list(&self) -> Vec<Listing> {
        ops::list(&self.store)
    }

    /// Encrypt `plaintext` as `name` and persist.
    pub fn add(
        &mut self,
        name: &str,
        plaintext: &[u8],
        operator: &mut dyn Operator,
    ) -> Result<Option<Record>> {
        let settings = self.settings;
        self.commit(|store| ops::add(store, name, plaintext, operator, &settings))
    }

    /// Read `path` from disk and add its bytes as `name`.
    pub fn add_file(
        &mut self,
        path: &Path,
        name: &str,
        operator: &mut dyn Operator,
    ) -> Result<Option<Record>> {
        let plaintext = Zeroizing::new(ops::read_source(path)?);
        self.add(name, &plaintext, operator)
    }

    /// Decrypt `name`. Never writes.
    pub fn read(&self, name: &str, operator: &mut dyn Operator) -> Result<Zeroizing<Vec<u8>>> {
        ops::read(&self.store, name, operator)
    }

    pub fn delete(&mut self, name: &str, operator: &mut dyn Operator) -> Result<Record> {
        self.commit(|store| ops::delete(store, name, operator))
    }

    pub fn rename(
        &mut self,
        old: &str,
        new: &str,
        operator: &mut dyn Operator,
    ) -> Result<Option<Record>> {
        let policy = self.settings.rename_policy;
        self.commit(|store| ops::rename(store, old, new, operator, policy))
    }

    pub fn upgrade(&mut self, name: &str, operator: &mut dyn Operator) -> Result<UpgradeOutcome> {
        let settings = self.settings;
        self.commit(|store| ops::upgrade(store, name, operator, &settings))
    }

    /// Apply `mutate` to a copy of the store, persist the copy, then adopt it.
    fn commit<T>(&mut self, mutate: impl FnOnce(&mut Store) -> Result<T>) -> Result<T> {
        let mut candidate = self.store.clone();
        let outcome = mutate(&mut candidate)?;

        if candidate != self.store {
            self.backend.save(&candidate)?;
            self.store = candidate;
        }
        Ok(outcome)
    }
}
