//! Configuration: optional config file plus CLI flags, resolved once at startup.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::PathBuf;

use super::Cli;

/// Optional defaults loaded from the config file.
///
/// Every field mirrors a CLI flag; flags given on the command line take
/// precedence.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub notes_dir: Option<PathBuf>,
    pub attachments_dir: Option<PathBuf>,
    pub bundles_dir: Option<PathBuf>,
    pub filter_tag: Option<String>,
    pub remove_filter_tag: Option<bool>,
    pub exclude_dirs: Option<Vec<String>>,
    pub log_level: Option<String>,
}

impl FileConfig {
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
    /// Default: `~/.config/burrow/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("burrow")
            .join("config.toml")
    }
}

/// The resolved, immutable run configuration.
///
/// Constructed once at startup from CLI flags and the config file and passed
/// by reference into the pipeline. All paths are absolute.
#[derive(Debug, Clone)]
pub struct Config {
    pub notes_dir: PathBuf,
    pub attachments_dir: PathBuf,
    pub bundles_dir: PathBuf,
    pub filter_tag: String,
    pub remove_filter_tag: bool,
    pub exclude_dirs: Vec<String>,
    pub log_level: String,
}

impl Config {
    /// Merges CLI flags over file-config defaults and validates the result.
    ///
    /// # Errors
    ///
    /// Fails when a required directory path is set by neither source, or when
    /// the notes directory does not exist.
    pub fn resolve(cli: &Cli, file: FileConfig) -> Result<Self> {
        let notes_dir = require_path("notes-dir", cli.notes_dir.clone().or(file.notes_dir))?;
        let attachments_dir = require_path(
            "attachments-dir",
            cli.attachments_dir.clone().or(file.attachments_dir),
        )?;
        let bundles_dir = require_path("bundles-dir", cli.bundles_dir.clone().or(file.bundles_dir))?;

        if !notes_dir.is_dir() {
            bail!("notes directory does not exist: {}", notes_dir.display());
        }

        let exclude_dirs = if cli.exclude_dirs.is_empty() {
            file.exclude_dirs.unwrap_or_default()
        } else {
            cli.exclude_dirs.clone()
        };

        Ok(Self {
            notes_dir,
            attachments_dir,
            bundles_dir,
            filter_tag: cli
                .filter_tag
                .clone()
                .or(file.filter_tag)
                .unwrap_or_else(|| "blog".to_string()),
            remove_filter_tag: cli.remove_filter_tag || file.remove_filter_tag.unwrap_or(false),
            exclude_dirs,
            log_level: cli
                .log_level
                .clone()
                .or(file.log_level)
                .unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require_path(flag: &str, value: Option<PathBuf>) -> Result<PathBuf> {
    let path = value.with_context(|| {
        format!(
            "--{flag} is required (pass the flag or set it in {})",
            FileConfig::config_path().display()
        )
    })?;

    if path.is_absolute() {
        Ok(path)
    } else {
        let cwd = std::env::current_dir().context("cannot determine current directory")?;
        Ok(cwd.join(path))
    }
}
