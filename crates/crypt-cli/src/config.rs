use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crypt_core::crypto::{DigestParams, Scheme};
use crypt_core::ops::{RenamePolicy, Settings};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CryptConfig {
    pub store: StoreSection,
    pub security: SecuritySection,
    pub rename: RenameSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    pub path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SecuritySection {
    pub scheme: Scheme,
    pub min_password_length: usize,
    pub argon2_memory_kib: u32,
    pub argon2_iterations: u32,
}

impl Default for SecuritySection {
    fn default() -> Self {
        let digest = DigestParams::default();
        Self {
            scheme: Scheme::CURRENT,
            min_password_length: 1,
            argon2_memory_kib: digest.memory_kib,
            argon2_iterations: digest.iterations,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RenameSection {
    pub overwrite: bool,
}

impl Default for RenameSection {
    fn default() -> Self {
        Self { overwrite: true }
    }
}

impl CryptConfig {
    /// Operation settings described by this config.
    pub fn settings(&self) -> Settings {
        Settings {
            scheme: self.security.scheme,
            digest: DigestParams {
                memory_kib: self.security.argon2_memory_kib,
                iterations: self.security.argon2_iterations,
                ..DigestParams::default()
            },
            min_password_length: self.security.min_password_length,
            rename_policy: if self.rename.overwrite {
                RenamePolicy::Overwrite
            } else {
                RenamePolicy::Refuse
            },
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_store_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("state.json"))
}

/// Read the config at `path`. A missing file yields the defaults.
pub fn read_config(path: &Path) -> anyhow::Result<CryptConfig> {
    if !path.exists() {
        return Ok(CryptConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("crypt"));
        }
    }
    Ok(home_dir()?.join(".config").join("crypt"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("crypt"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("crypt"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
