//! # Crypt Core
//!
//! Core library for Crypt - a password-protected virtual file store.
//!
//! A single JSON document maps logical names to records. Each record holds
//! a payload encrypted under its own password, a digest of that password,
//! and a non-secret hint shown before the password prompt.
//!
//! This crate holds the domain logic independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **crypto**: Cipher engine (age and legacy AES-192-CBC) and password verifier
//! - **store**: Record model, in-memory store, persistence backends
//! - **ops**: The store verbs (list, add, read, rename, delete, upgrade)
//! - **vault**: Load/mutate/save driver around a backend
//! - **prompt**: The operator seam used to obtain passwords and hints

pub mod crypto;
pub mod error;
pub mod fs;
pub mod ops;
pub mod prompt;
pub mod store;
pub mod vault;

pub use error::{CryptError, Result};
pub use prompt::{Operator, SecretPrompt};
pub use store::{JsonFileBackend, Record, Scheme, Store, StoreBackend};
pub use vault::Vault;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
