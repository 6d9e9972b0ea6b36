// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::{Error, Result};

/// Metadata allowlists for the clean transformation.
///
/// Everything not listed here is considered execution bookkeeping and gets
/// stripped from cleaned documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanRules {
    /// Notebook-level metadata keys to keep
    #[serde(default = "default_keep_notebook_metadata")]
    pub keep_notebook_metadata: Vec<String>,

    /// Cell-level metadata keys to keep
    #[serde(default = "default_keep_cell_metadata")]
    pub keep_cell_metadata: Vec<String>,
}

impl Default for CleanRules {
    fn default() -> Self {
        Self {
            keep_notebook_metadata: default_keep_notebook_metadata(),
            keep_cell_metadata: default_keep_cell_metadata(),
        }
    }
}

fn default_keep_notebook_metadata() -> Vec<String> {
    vec!["kernelspec".into(), "jupytext".into()]
}

fn default_keep_cell_metadata() -> Vec<String> {
    vec!["tags".into(), "collapsed".into()]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Filename prefix that marks a sanitized copy
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Rewrite originals in place with execution metadata stripped
    /// (outputs kept). Off by default: the original file is never touched.
    #[serde(default)]
    pub scrub_in_place: bool,

    /// Metadata allowlists for the clean transformation
    #[serde(default)]
    pub clean: CleanRules,
}

fn default_prefix() -> String {
    "_".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            scrub_in_place: false,
            clean: CleanRules::default(),
        }
    }
}

impl Config {
    /// Load with priority: CLI > ENV > user config > project config > defaults
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Project-level config (.nbscrub.toml in the working directory)
        if let Ok(cwd) = std::env::current_dir() {
            let project_config = cwd.join(".nbscrub.toml");
            if project_config.exists() {
                figment = figment.merge(Toml::file(&project_config));
            }
        }

        // User-level config
        if let Some(path) = Self::config_path() {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }

        // Environment variables (NBSCRUB_PREFIX, etc.)
        // Use __ separator for nested keys (e.g., NBSCRUB_CLEAN__KEEP_CELL_METADATA)
        figment = figment.merge(Env::prefixed("NBSCRUB_").split("__"));

        let mut config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        // CLI overrides (highest priority)
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "nbscrub").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref p) = cli.prefix {
            self.prefix = p.clone();
        }
        if cli.scrub_in_place {
            self.scrub_in_place = true;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.prefix.is_empty() {
            return Err(Error::Config(
                "prefix must not be empty: an empty prefix would make every \
                 notebook look like a sanitized copy"
                    .into(),
            ));
        }

        if self.prefix.contains('/') || self.prefix.contains('\\') {
            return Err(Error::Config(format!(
                "prefix must not contain path separators, got {:?}",
                self.prefix
            )));
        }

        if self.prefix.starts_with('.') {
            return Err(Error::Config(format!(
                "prefix must not start with '.': hidden files are skipped \
                 during scanning, got {:?}",
                self.prefix
            )));
        }

        Ok(())
    }

    /// Create a default config file at the user config path
    pub fn create_default() -> Result<PathBuf> {
        let dir = Self::config_dir()
            .ok_or_else(|| Error::Config("Cannot determine config directory".into()))?;
        fs::create_dir_all(&dir)?;

        let path = dir.join("config.toml");
        let default = Config::default();
        let content = toml::to_string_pretty(&default)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;
        fs::write(&path, content)?;
        Ok(path)
    }
}
