//! Operator seam: where passwords and hints come from.
//!
//! Operations never read the terminal themselves. They ask an [`Operator`],
//! which the CLI backs with interactive prompts and tests back with
//! scripted answers.

use secrecy::SecretString;

use crate::error::Result;

/// What a password is being requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretPrompt<'a> {
    /// Choosing the password for a new record
    Create { name: &'a str },
    /// Unlocking an existing record
    Unlock { name: &'a str, hint: Option<&'a str> },
}

impl SecretPrompt<'_> {
    /// Record the password is for.
    pub fn name(&self) -> &str {
        match self {
            SecretPrompt::Create { name } | SecretPrompt::Unlock { name, .. } => name,
        }
    }

    /// Whether the password is being chosen rather than entered.
    pub fn is_create(&self) -> bool {
        matches!(self, SecretPrompt::Create { .. })
    }

    /// Prompt text: `Password`, or `Password (<hint>)` when unlocking a
    /// record that has a hint.
    pub fn label(&self) -> String {
        match self {
            SecretPrompt::Unlock {
                hint: Some(hint), ..
            } if !hint.is_empty() => format!("Password ({})", hint),
            _ => "Password".to_string(),
        }
    }
}

/// Source of operator input. Calls block until the operator answers.
pub trait Operator {
    /// Obtain a password.
    fn secret(&mut self, prompt: &SecretPrompt<'_>) -> Result<SecretString>;

    /// Obtain the hint for a new record. Empty means no hint.
    fn hint(&mut self, name: &str) -> Result<String>;
}
