//! Cryptographic operations for Crypt.
//!
//! Two record schemes exist side by side:
//!
//! - **Age** (current): payload encrypted with age passphrase encryption
//!   (scrypt KDF, random per-record salt, authenticated), password digest
//!   stored as an Argon2id PHC string with its own random salt.
//! - **Legacy**: AES-192-CBC keyed by a single MD5 pass over the raw
//!   password with no salt, digest stored as base64 SHA-256. Kept so stores
//!   written before the scheme tag existed remain readable and can be upgraded.
//!
//! ## Threat Model
//!
//! We defend against:
//! - Theft of the store document (age records)
//! - Reading a record without its password through the CLI
//!
//! We do NOT defend against:
//! - Offline attacks on legacy records (unsalted, fast KDF)
//! - Compromised OS / keylogger
//! - Concurrent writers on the same store

pub mod age_cipher;
pub mod cipher;
pub mod digest;
pub mod legacy;
pub mod password;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use cipher::{decrypt, encrypt};
pub use digest::{hash_password, verify_password, DigestParams};
pub use password::validate_password;

/// The cipher and digest pair a record was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    /// AES-192-CBC + SHA-256 digest, the pre-age record format
    Legacy,
    /// age + Argon2id digest
    Age,
}

impl Scheme {
    /// Scheme used for new records unless configured otherwise.
    pub const CURRENT: Scheme = Scheme::Age;

    pub fn is_legacy(self) -> bool {
        matches!(self, Scheme::Legacy)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Legacy => "legacy",
            Scheme::Age => "age",
        }
    }
}

impl Default for Scheme {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
