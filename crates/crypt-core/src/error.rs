//! Error types for Crypt core operations.
//!
//! Every operation reports one of these kinds. The CLI layer maps them to
//! user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for Crypt operations.
pub type Result<T> = std::result::Result<T, CryptError>;

/// Core error type for Crypt operations.
#[derive(Debug, Error)]
pub enum CryptError {
    /// Bad or missing input (arguments, unreadable source file, weak password)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Referenced record is absent
    #[error("Could not find file: {0}")]
    NotFound(String),

    /// Password did not match the stored digest.
    ///
    /// Carries no detail about which check failed.
    #[error("Wrong password")]
    AuthFailure,

    /// Store document unreadable, corrupt, or unwritable
    #[error("Store error: {0}")]
    Persistence(String),

    /// Encryption, decryption, or key derivation error
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// The operator could not supply a password or hint
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl From<std::io::Error> for CryptError {
    fn from(err: std::io::Error) -> Self {
        CryptError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for CryptError {
    fn from(err: serde_json::Error) -> Self {
        CryptError::Persistence(format!("Malformed store document: {}", err))
    }
}
