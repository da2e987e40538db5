//! Password validation for newly created records.

use crate::error::{CryptError, Result};

/// Validate a new record password.
///
/// # Requirements
///
/// - Not empty or only whitespace
/// - At least `min_length` characters long
///
/// # Examples
///
/// ```
/// use crypt_core::crypto::validate_password;
///
/// assert!(validate_password("abc123", 1).is_ok());
/// assert!(validate_password("short", 8).is_err());
/// ```
pub fn validate_password(password: &str, min_length: usize) -> Result<()> {
    if password.trim().is_empty() {
        return Err(CryptError::InvalidInput(
            "Password cannot be empty".to_string(),
        ));
    }

    let length = password.chars().count();
    if length < min_length {
        return Err(CryptError::InvalidInput(format!(
            "Password must be at least {} characters (got {})",
            min_length, length
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("abc123", 1).is_ok());
        assert!(validate_password("longer password with spaces!@#", 8).is_ok());
    }

    #[test]
    fn test_password_empty() {
        assert!(validate_password("", 1).is_err());
        assert!(validate_password("   ", 1).is_err());
        assert!(validate_password("\n\t", 0).is_err());
    }

    #[test]
    fn test_password_too_short() {
        let result = validate_password("short", 8);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("at least 8 characters"));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Four characters, eight bytes
        assert!(validate_password("ññññ", 4).is_ok());
        assert!(validate_password("ññññ", 5).is_err());
    }
}
