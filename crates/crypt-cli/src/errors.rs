//! CLI error types for structured error handling.
//!
//! Core errors are mapped to [`CliError`] values that carry an exit code,
//! so every failure leaves the process the same way.

use std::fmt;

use crypt_core::CryptError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Record not found
    NotFound { message: String, hint: String },

    /// Wrong password
    AuthFailed {
        message: String,
        hint: Option<String>,
    },

    /// Invalid user input
    InvalidInput(String),

    /// Store document could not be read or written
    Store(String),

    /// Cipher failure
    Crypto(String),

    /// Anything else
    Other(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, .. } => write!(f, "{}", message),
            CliError::AuthFailed { message, .. } => write!(f, "{}", message),
            CliError::InvalidInput(message)
            | CliError::Store(message)
            | CliError::Crypto(message)
            | CliError::Other(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an AuthFailed error with message and hint.
    pub fn auth_failed_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::AuthFailed { .. } => exit_codes::AUTH_FAILED,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::Store(_) => exit_codes::STORE_FAILED,
            CliError::Crypto(_) => exit_codes::CRYPTO_FAILED,
            CliError::Other(_) => exit_codes::GENERAL,
        }
    }

    /// Follow-up suggestion shown under the message, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. } => Some(hint.as_str()),
            CliError::AuthFailed { hint, .. } => hint.as_deref(),
            _ => None,
        }
    }

    /// Classify an error coming out of a command handler.
    pub fn from_anyhow(err: anyhow::Error) -> Self {
        let err = match err.downcast::<CliError>() {
            Ok(cli) => return cli,
            Err(err) => err,
        };
        match err.downcast::<CryptError>() {
            Ok(core) => CliError::from(core),
            Err(other) => CliError::Other(format!("{:#}", other)),
        }
    }
}

impl From<CryptError> for CliError {
    fn from(err: CryptError) -> Self {
        let message = err.to_string();
        match err {
            CryptError::NotFound(_) => {
                CliError::not_found(message, "Hint: Run `crypt ls` to see stored files.")
            }
            CryptError::AuthFailure => CliError::auth_failed_with_hint(
                "Wrong password, exiting..",
                "Hint: The hint shown at the prompt was set when the file was added.",
            ),
            CryptError::InvalidInput(_) | CryptError::Prompt(_) => CliError::InvalidInput(message),
            CryptError::Persistence(_) => CliError::Store(message),
            CryptError::Crypto(_) => CliError::Crypto(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_per_core_error() {
        let cases = [
            (CryptError::NotFound("x".into()), 3),
            (CryptError::InvalidInput("x".into()), 4),
            (CryptError::AuthFailure, 5),
            (CryptError::Persistence("x".into()), 6),
            (CryptError::Crypto("x".into()), 7),
            (CryptError::Prompt("x".into()), 4),
        ];
        for (core, code) in cases {
            assert_eq!(CliError::from(core).exit_code(), code);
        }
    }

    #[test]
    fn test_not_found_message_names_record() {
        let err = CliError::from(CryptError::NotFound("notes.txt".into()));
        assert_eq!(err.to_string(), "Could not find file: notes.txt");
        assert!(err.hint().is_some());
    }

    #[test]
    fn test_from_anyhow_unwraps_core_error() {
        let err = anyhow::Error::new(CryptError::AuthFailure);
        assert_eq!(CliError::from_anyhow(err).exit_code(), 5);

        let err = anyhow::anyhow!("boom");
        assert_eq!(CliError::from_anyhow(err).exit_code(), 1);
    }

    #[test]
    fn test_from_anyhow_keeps_cli_error() {
        let err = anyhow::Error::new(CliError::InvalidInput("bad".into()));
        assert_eq!(CliError::from_anyhow(err).exit_code(), 4);
    }
}
