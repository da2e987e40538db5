//! JSON file backend.
//!
//! The document is held on disk as pretty-printed JSON and replaced
//! atomically on every save (temp file + fsync + rename).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{Store, StoreBackend};
use crate::error::{CryptError, Result};
use crate::fs::write_atomic;

/// Store document kept in a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StoreBackend for JsonFileBackend {
    fn load(&self) -> Result<Store> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no store document yet, starting empty");
                return Ok(Store::new());
            }
            Err(err) => {
                return Err(CryptError::Persistence(format!(
                    "Failed to read store {}: {}",
                    self.path.display(),
                    err
                )))
            }
        };

        // A zero-length file is what `touch` leaves behind
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Store::new());
        }

        let store: Store = serde_json::from_slice(&bytes).map_err(|e| {
            CryptError::Persistence(format!(
                "Store {} is corrupt: {}",
                self.path.display(),
                e
            ))
        })?;
        debug!(path = %self.path.display(), records = store.len(), "loaded store");
        Ok(store)
    }

    fn save(&self, store: &Store) -> Result<()> {
        let mut document = serde_json::to_vec_pretty(store)?;
        document.push(b'\n');
        write_atomic(&self.path, &document).map_err(|e| {
            CryptError::Persistence(format!(
                "Failed to write store {}: {}",
                self.path.display(),
                e
            ))
        })?;
        debug!(path = %self.path.display(), records = store.len(), "saved store");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
