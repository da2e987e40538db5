//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (clap argument errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Unclassified failure.
    pub const GENERAL: i32 = 1;

    /// Record not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input, unreadable source file, rejected password.
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed (wrong password).
    pub const AUTH_FAILED: i32 = 5;

    /// Store document unreadable, corrupt or unwritable.
    pub const STORE_FAILED: i32 = 6;

    /// Cipher failure under a verified password.
    pub const CRYPTO_FAILED: i32 = 7;
}

/// Environment variable holding the record password.
pub const PASSWORD_ENV: &str = "CRYPT_PASSWORD";

/// Environment variable holding the hint for new records.
pub const HINT_ENV: &str = "CRYPT_HINT";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "CRYPT_LOG";
