//! Persistence seam for the store document.

use super::Store;
use crate::error::Result;

/// Durable home of a [`Store`].
///
/// Implementations must ensure:
/// - `load` of a document that was never written yields an empty store
/// - `save` replaces the whole document atomically
/// - a failed `save` leaves the previously saved document intact
pub trait StoreBackend {
    /// Read the persisted document.
    ///
    /// # Errors
    ///
    /// Returns `CryptError::Persistence` if the document exists but cannot
    /// be read or parsed.
    fn load(&self) -> Result<Store>;

    /// Persist the full document.
    ///
    /// # Errors
    ///
    /// Returns `CryptError::Persistence` on I/O failure.
    fn save(&self, store: &Store) -> Result<()>;

    /// Human-readable location, used in messages.
    fn location(&self) -> String;
}
