//! Application context for the Crypt CLI.
//!
//! Combines CLI arguments with the lazily-loaded config file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;
use tracing::debug;

use crypt_core::ops::Settings;
use crypt_core::{JsonFileBackend, Vault};

use crate::cli::Cli;
use crate::config::{read_config, CryptConfig};
use crate::ui::UiContext;

use super::resolver::{resolve_config_path, resolve_store_path};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<CryptConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the config file, loading it on first use.
    pub fn config(&self) -> anyhow::Result<&CryptConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path(self.cli)?;
            debug!(path = %path.display(), "loading config");
            read_config(&path)
        })
    }

    /// Operation settings from the config file.
    pub fn settings(&self) -> anyhow::Result<Settings> {
        Ok(self.config()?.settings())
    }

    pub fn store_path(&self) -> anyhow::Result<PathBuf> {
        resolve_store_path(self.cli, self.config()?)
    }

    /// Load the store document.
    pub fn open_vault(&self, settings: Settings) -> anyhow::Result<Vault<JsonFileBackend>> {
        let backend = JsonFileBackend::new(self.store_path()?);
        Ok(Vault::open(backend, settings)?)
    }

    pub fn ui_context(&self, json_flag: bool, format_flag: Option<&str>) -> UiContext {
        UiContext::from_env(json_flag, format_flag)
    }
}
