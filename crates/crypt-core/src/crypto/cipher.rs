//! Cipher engine: text-safe encryption of record payloads.
//!
//! Both schemes produce binary output which is stored as standard base64.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use secrecy::{ExposeSecret, SecretString};
use zeroize::Zeroizing;

use super::{age_cipher, legacy, Scheme};
use crate::error::{CryptError, Result};

/// Encrypt `plaintext` under `password` and return base64 ciphertext.
pub fn encrypt(plaintext: &[u8], password: &SecretString, scheme: Scheme) -> Result<String> {
    let raw = match scheme {
        Scheme::Age => age_cipher::encrypt(plaintext, password)?,
        Scheme::Legacy => legacy::encrypt(plaintext, password.expose_secret().as_bytes())?,
    };
    Ok(STANDARD.encode(raw))
}

/// Decrypt base64 `ciphertext` produced by [`encrypt`] under the same scheme.
///
/// # Errors
///
/// - `CryptError::Crypto` for malformed base64 or corrupt ciphertext
/// - `CryptError::AuthFailure` when an age payload rejects the password
pub fn decrypt(
    ciphertext: &str,
    password: &SecretString,
    scheme: Scheme,
) -> Result<Zeroizing<Vec<u8>>> {
    let raw = STANDARD
        .decode(ciphertext.trim())
        .map_err(|e| CryptError::Crypto(format!("Ciphertext is not valid base64: {}", e)))?;
    match scheme {
        Scheme::Age => age_cipher::decrypt(&raw, password),
        Scheme::Legacy => legacy::decrypt(&raw, password.expose_secret().as_bytes()),
    }
}
