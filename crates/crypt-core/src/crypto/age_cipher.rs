//! Age encryption/decryption for current-scheme records.
//!
//! Age derives the file key from the password with scrypt and a random
//! salt, so two records sharing a password still get unrelated keys. The
//! header is MAC'd, which makes a wrong password fail deterministically.

use std::io::{Read, Write};
use std::iter;

use secrecy::{ExposeSecret, SecretString};
use zeroize::Zeroizing;

use crate::error::{CryptError, Result};

/// Encrypt data using age passphrase-based encryption.
///
/// Returns the binary age file.
///
/// # Examples
///
/// ```
/// use crypt_core::crypto::age_cipher::encrypt;
/// use secrecy::SecretString;
///
/// let password = SecretString::from("my-secure-passphrase".to_string());
/// let encrypted = encrypt(b"secret data", &password).unwrap();
/// assert_ne!(encrypted.as_slice(), b"secret data");
/// ```
pub fn encrypt(data: &[u8], password: &SecretString) -> Result<Vec<u8>> {
    let encryptor = age::Encryptor::with_user_passphrase(SecretString::from(
        password.expose_secret().to_string(),
    ));

    let mut encrypted = Vec::new();
    let mut writer = encryptor
        .wrap_output(&mut encrypted)
        .map_err(|e| CryptError::Crypto(format!("Failed to create encryptor: {}", e)))?;

    writer
        .write_all(data)
        .map_err(|e| CryptError::Crypto(format!("Encryption write failed: {}", e)))?;

    writer
        .finish()
        .map_err(|e| CryptError::Crypto(format!("Encryption finish failed: {}", e)))?;

    Ok(encrypted)
}

/// Decrypt an age file produced by [`encrypt`].
///
/// # Errors
///
/// - `CryptError::AuthFailure` if the password does not unlock the file
/// - `CryptError::Crypto` if the data is corrupted or not an age file
pub fn decrypt(encrypted_data: &[u8], password: &SecretString) -> Result<Zeroizing<Vec<u8>>> {
    let decryptor = age::Decryptor::new(encrypted_data)
        .map_err(|e| CryptError::Crypto(format!("Failed to create decryptor: {}", e)))?;

    let identity =
        age::scrypt::Identity::new(SecretString::from(password.expose_secret().to_string()));
    let mut reader = decryptor
        .decrypt(iter::once(&identity as &dyn age::Identity))
        .map_err(|e| match e {
            age::DecryptError::NoMatchingKeys
            | age::DecryptError::DecryptionFailed
            | age::DecryptError::KeyDecryptionFailed => CryptError::AuthFailure,
            _ => CryptError::Crypto(format!("Decryption failed: {}", e)),
        })?;

    let mut decrypted = Zeroizing::new(Vec::new());
    reader
        .read_to_end(&mut decrypted)
        .map_err(|e| CryptError::Crypto(format!("Failed to read decrypted data: {}", e)))?;

    Ok(decrypted)
}
