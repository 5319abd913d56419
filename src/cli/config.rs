//! Configuration file support.

use crate::vault::PathSchema;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from the config file.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default vault directory
    pub dir: Option<PathBuf>,

    /// Vault-relative folder holding periodic notes
    pub periodic_folder: String,

    /// Vault-relative folder holding note templates
    pub templates_folder: String,

    /// Group periodic notes under a year folder
    pub group_by_year: bool,

    /// Page size for paginated listings
    pub results_per_page: usize,

    /// Locale hint carried through to listing order
    pub locale: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dir: None,
            periodic_folder: "periodic".to_string(),
            templates_folder: "_templates".to_string(),
            group_by_year: true,
            results_per_page: 20,
            locale: "en".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/almanac/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("almanac")
            .join("config.toml")
    }

    /// Resolve the vault directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `dir` setting
    /// 3. Current working directory
    pub fn vault_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Builds the periodic-note path schema from the configured folders.
    pub fn schema(&self) -> PathSchema {
        PathSchema::new(&self.periodic_folder, self.group_by_year)
    }
}
