//! Legacy record cipher: AES-192-CBC keyed straight from the password.
//!
//! Key and IV come from OpenSSL's `EVP_BytesToKey` with MD5, one iteration
//! and no salt: `D1 = MD5(pw)`, `Di = MD5(D(i-1) || pw)`, concatenated until
//! 24 key bytes + 16 IV bytes are available. Padding is PKCS#7.
//!
//! The same password always yields the same key and IV. Kept for stores
//! written before records carried a scheme tag.

use aes::Aes192;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use md5::{Digest, Md5};
use zeroize::Zeroizing;

use crate::error::{CryptError, Result};

const KEY_LENGTH: usize = 24;
const IV_LENGTH: usize = 16;

type Aes192CbcEnc = cbc::Encryptor<Aes192>;
type Aes192CbcDec = cbc::Decryptor<Aes192>;

/// Derive key and IV material from a password.
fn bytes_to_key(password: &[u8]) -> Zeroizing<Vec<u8>> {
    let mut material = Zeroizing::new(Vec::with_capacity(KEY_LENGTH + IV_LENGTH + 16));
    let mut previous: Option<Zeroizing<Vec<u8>>> = None;

    while material.len() < KEY_LENGTH + IV_LENGTH {
        let mut hasher = Md5::new();
        if let Some(prev) = previous.as_ref() {
            hasher.update(prev.as_slice());
        }
        hasher.update(password);
        let block = Zeroizing::new(hasher.finalize().to_vec());
        material.extend_from_slice(&block);
        previous = Some(block);
    }

    material
}

/// Encrypt `data` in the legacy format.
pub fn encrypt(data: &[u8], password: &[u8]) -> Result<Vec<u8>> {
    let material = bytes_to_key(password);
    let cipher = Aes192CbcEnc::new_from_slices(
        &material[..KEY_LENGTH],
        &material[KEY_LENGTH..KEY_LENGTH + IV_LENGTH],
    )
    .map_err(|e| CryptError::Crypto(format!("Invalid legacy key material: {}", e)))?;

    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(data))
}

/// Decrypt a legacy-format payload.
///
/// # Errors
///
/// Returns `CryptError::Crypto` on bad padding or a ragged final block. A
/// wrong password usually lands here too, but not always; callers verify
/// the password digest first.
pub fn decrypt(data: &[u8], password: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    let material = bytes_to_key(password);
    let cipher = Aes192CbcDec::new_from_slices(
        &material[..KEY_LENGTH],
        &material[KEY_LENGTH..KEY_LENGTH + IV_LENGTH],
    )
    .map_err(|e| CryptError::Crypto(format!("Invalid legacy key material: {}", e)))?;

    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(data)
        .map(Zeroizing::new)
        .map_err(|_| CryptError::Crypto("Bad decrypt".to_string()))
}

#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    use super::*;

    #[test]
    fn test_first_block_is_md5_of_password() {
        // md5("password") = 5f4dcc3b5aa765d61d8327deb882cf99
        let expected: [u8; 16] = [
            0x5f, 0x4d, 0xcc, 0x3b, 0x5a, 0xa7, 0x65, 0xd6, 0x1d, 0x83, 0x27, 0xde, 0xb8, 0x82,
            0xcf, 0x99,
        ];
        let material = bytes_to_key(b"password");
        assert_eq!(&material[..16], &expected);
        assert!(material.len() >= KEY_LENGTH + IV_LENGTH);
    }

    #[test]
    fn test_matches_openssl_ciphertext() {
        // printf hello | openssl enc -aes-192-cbc -md md5 -nosalt -pass pass:abc123
        let expected = STANDARD.decode("6wesqeL5GRI1/ZbwDEJmQg==").unwrap();
        assert_eq!(encrypt(b"hello", b"abc123").unwrap(), expected);
        assert_eq!(decrypt(&expected, b"abc123").unwrap().as_slice(), b"hello");
    }

    #[test]
    fn test_decrypts_multi_block_openssl_ciphertext() {
        let ciphertext = STANDARD
            .decode("tsGAeNL2zpo8smIccvitcHI0jhoKSVgL+i8FqRc+mua+SURt5CgG/3qVc8tCLm73")
            .unwrap();
        let plaintext = decrypt(&ciphertext, "pässwörd".as_bytes()).unwrap();
        assert_eq!(
            plaintext.as_slice(),
            "hello wörld, a longer payload > 16 bytes".as_bytes()
        );
    }

    #[test]
    fn test_key_derivation_is_deterministic() {
        assert_eq!(*bytes_to_key(b"abc123"), *bytes_to_key(b"abc123"));
        assert_ne!(*bytes_to_key(b"abc123"), *bytes_to_key(b"abc124"));
    }

    #[test]
    fn test_round_trip() {
        let encrypted = encrypt(b"hello", b"abc123").unwrap();
        assert_eq!(encrypted.len(), 16);

        let decrypted = decrypt(&encrypted, b"abc123").unwrap();
        assert_eq!(decrypted.as_slice(), b"hello");
    }

    #[test]
    fn test_same_password_same_ciphertext() {
        assert_eq!(
            encrypt(b"hello", b"abc123").unwrap(),
            encrypt(b"hello", b"abc123").unwrap()
        );
    }

    #[test]
    fn test_block_aligned_plaintext_gets_full_padding_block() {
        let plaintext = [0x42u8; 32];
        let encrypted = encrypt(&plaintext, b"abc123").unwrap();
        assert_eq!(encrypted.len(), 48);
        assert_eq!(decrypt(&encrypted, b"abc123").unwrap().as_slice(), &plaintext);
    }

    #[test]
    fn test_ragged_ciphertext_rejected() {
        let result = decrypt(&[0u8; 15], b"abc123");
        assert!(matches!(result, Err(CryptError::Crypto(_))));
    }
}
