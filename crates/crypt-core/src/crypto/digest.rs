//! Password verifier.
//!
//! Records carry a one-way digest of their password so a wrong password is
//! rejected before any decryption is attempted.
//!
//! - Legacy records: `base64(SHA-256(password))`.
//! - Age records: Argon2id PHC string with a random 16-byte salt, e.g.
//!   `$argon2id$v=19$m=65536,t=3,p=1$<salt>$<hash>`.

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};
use tracing::warn;

use super::Scheme;
use crate::error::{CryptError, Result};

/// Default Argon2id parameters.
///
/// - Memory: 64 MB (64 * 1024 KB)
/// - Iterations: 3
/// - Parallelism: 1
const ARGON2_MEMORY_KB: u32 = 64 * 1024;
const ARGON2_ITERATIONS: u32 = 3;
const ARGON2_PARALLELISM: u32 = 1;

const SALT_LENGTH: usize = 16;

/// Argon2id cost parameters used when hashing new passwords.
///
/// Verification always uses the parameters embedded in the stored digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestParams {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for DigestParams {
    fn default() -> Self {
        Self {
            memory_kib: ARGON2_MEMORY_KB,
            iterations: ARGON2_ITERATIONS,
            parallelism: ARGON2_PARALLELISM,
        }
    }
}

impl DigestParams {
    fn argon2(&self) -> Result<Argon2<'static>> {
        let params = argon2::Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| CryptError::Crypto(format!("Failed to create Argon2 params: {}", e)))?;
        Ok(Argon2::new(
            argon2::Algorithm::Argon2id,
            argon2::Version::V0x13,
            params,
        ))
    }
}

/// Compute the digest stored alongside a record written under `scheme`.
pub fn hash_password(
    password: &SecretString,
    scheme: Scheme,
    params: &DigestParams,
) -> Result<String> {
    match scheme {
        Scheme::Legacy => Ok(sha256_digest(password.expose_secret())),
        Scheme::Age => {
            let mut salt_bytes = [0u8; SALT_LENGTH];
            getrandom::getrandom(&mut salt_bytes)
                .map_err(|e| CryptError::Crypto(format!("Failed to generate salt: {}", e)))?;
            let salt = SaltString::encode_b64(&salt_bytes)
                .map_err(|e| CryptError::Crypto(format!("Failed to encode salt: {}", e)))?;
            let hash = params
                .argon2()?
                .hash_password(password.expose_secret().as_bytes(), &salt)
                .map_err(|e| CryptError::Crypto(format!("Password hashing failed: {}", e)))?;
            Ok(hash.to_string())
        }
    }
}

/// Check `candidate` against a stored digest.
///
/// An unparsable stored digest never verifies.
pub fn verify_password(stored: &str, candidate: &SecretString, scheme: Scheme) -> bool {
    match scheme {
        Scheme::Legacy => sha256_digest(candidate.expose_secret()) == stored,
        Scheme::Age => match PasswordHash::new(stored) {
            Ok(parsed) => Argon2::default()
                .verify_password(candidate.expose_secret().as_bytes(), &parsed)
                .is_ok(),
            Err(err) => {
                warn!(error = %err, "stored password digest is not a valid PHC string");
                false
            }
        },
    }
}

fn sha256_digest(password: &str) -> String {
    STANDARD.encode(Sha256::digest(password.as_bytes()))
}
