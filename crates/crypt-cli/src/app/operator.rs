//! Terminal-backed [`Operator`]: environment variables first, then prompts.

use std::io::IsTerminal;

use dialoguer::{Input, Password};
use secrecy::SecretString;

use crypt_core::{CryptError, Operator, Result, SecretPrompt};

use crate::constants::{HINT_ENV, PASSWORD_ENV};

pub struct TerminalOperator {
    interactive: bool,
}

impl TerminalOperator {
    /// Prompts are only offered when both stdin and stderr are terminals.
    pub fn from_env() -> Self {
        Self {
            interactive: std::io::stdin().is_terminal() && std::io::stderr().is_terminal(),
        }
    }
}

impl Operator for TerminalOperator {
    fn secret(&mut self, prompt: &SecretPrompt<'_>) -> Result<SecretString> {
        if let Some(value) = env_password() {
            return Ok(SecretString::from(value));
        }
        if !self.interactive {
            return Err(CryptError::InvalidInput(format!(
                "No password provided and no TTY available. Set {}.",
                PASSWORD_ENV
            )));
        }

        let mut input = Password::new().with_prompt(prompt.label());
        if prompt.is_create() {
            input = input.with_confirmation("Confirm password", "Passwords do not match");
        }
        input
            .interact()
            .map(SecretString::from)
            .map_err(|e| CryptError::Prompt(format!("Failed to read password: {}", e)))
    }

    fn hint(&mut self, _name: &str) -> Result<String> {
        if let Ok(value) = std::env::var(HINT_ENV) {
            return Ok(value);
        }
        if !self.interactive {
            return Ok(String::new());
        }

        Input::<String>::new()
            .with_prompt("Hint")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| CryptError::Prompt(format!("Failed to read hint: {}", e)))
    }
}

fn env_password() -> Option<String> {
    std::env::var(PASSWORD_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
}
