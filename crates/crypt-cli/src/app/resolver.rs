//! Path resolution for config and store files.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, default_store_path, CryptConfig};

/// Resolve the config file path: `--config` / `CRYPT_CONFIG`, else XDG.
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(path) = non_blank(cli.config.as_deref()) {
        return Ok(PathBuf::from(path));
    }
    default_config_path()
}

/// Resolve the store document path: `--store` / `CRYPT_STORE`, else the
/// config's `store.path`, else XDG data dir.
pub fn resolve_store_path(cli: &Cli, config: &CryptConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = non_blank(cli.store.as_deref()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = non_blank(config.store.path.as_deref()) {
        return Ok(PathBuf::from(path));
    }
    default_store_path()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
