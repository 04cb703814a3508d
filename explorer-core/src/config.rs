//! src/config.rs
//! ============================================================================
//! # Config: Explorer Configuration Loader and Saver
//!
//! Loads and saves settings as TOML from the platform config path using the
//! [`directories`](https://docs.rs/directories) crate. A missing file is
//! replaced by the defaults, which are written back so users have something
//! to edit.
//!
//! ## Example
//! ```rust,ignore
//! let config = Config::load()?;
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppError;
use crate::logging::LoggerConfig;

/// Command name passed to `open` when the action carries no argument.
pub const DEFAULT_OPEN_COMMAND: &str = "edit";

/// Main configuration struct for the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Program that backs the `edit` open command.
    pub editor_cmd: String,

    /// Command used by `open` when none is given.
    pub open_command: String,

    pub show_hidden: bool,

    /// Ask before `remove` deletes anything.
    pub confirm_remove: bool,

    pub logging: LoggerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor_cmd: std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string()),
            open_command: DEFAULT_OPEN_COMMAND.to_string(),
            show_hidden: false,
            confirm_remove: true,
            logging: LoggerConfig::default(),
        }
    }
}

impl Config {
    /// Loads config from the platform config dir, or creates it with defaults.
    ///
    /// The config is expected at `$XDG_CONFIG_HOME/explorer/config.toml`
    /// (Linux), or equivalent on Windows/macOS.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            Ok(Self::load_from(&path)?)
        } else {
            info!(
                "No config file found at {}, using default configuration. Creating it now.",
                path.display()
            );

            let default_config = Self::default();
            default_config.save_to(&path)?;

            Ok(default_config)
        }
    }

    /// Reads and parses an explicit config file.
    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        info!("Loading config from {}", path.display());
        let text = fs::read_to_string(path).map_err(|source| AppError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(toml::from_str(&text)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        info!("Saving config to {}", path.display());

        let io_err = |source| AppError::ConfigIo {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let toml_str = toml::to_string_pretty(self)?;
        fs::write(path, toml_str).map_err(io_err)?;

        Ok(())
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn config_dir() -> anyhow::Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "explorer", "explorer")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory."))?;
        Ok(proj_dirs.config_dir().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_then_load_keeps_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            editor_cmd: "nvim".into(),
            open_command: "vsplit".into(),
            show_hidden: true,
            confirm_remove: false,
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.editor_cmd, "nvim");
        assert_eq!(loaded.open_command, "vsplit");
        assert!(loaded.show_hidden);
        assert!(!loaded.confirm_remove);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "show_hidden = true\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(loaded.show_hidden);
        assert_eq!(loaded.open_command, DEFAULT_OPEN_COMMAND);
        assert!(loaded.confirm_remove);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "show_hidden = [").unwrap();

        assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));
    }
}
