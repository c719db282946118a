//! Configuration for ticket-desk
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `TICKET_DESK_*` environment variables (`__` separates nested keys, e.g.
//! `TICKET_DESK_STORAGE__DEFAULT_FILE`).

use crate::error::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "TICKET_DESK";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// CSV file used when no `--file` is given
    #[serde(default = "default_file")]
    pub default_file: PathBuf,

    /// Load `default_file` when an interactive session starts
    #[serde(default)]
    pub autoload: bool,
}

fn default_file() -> PathBuf {
    PathBuf::from("tickets.csv")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            default_file: default_file(),
            autoload: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_color")]
    pub color: bool,
}

const fn default_color() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

impl Config {
    /// Location of the per-user configuration file, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "ticket-desk").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration, requiring `path` to exist when one is given
    ///
    /// Without an explicit path the per-user file is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        match path {
            Some(path) => {
                builder = builder.add_source(config::File::from(path).required(true));
            },
            None => {
                if let Some(user_path) = Self::default_path() {
                    builder = builder.add_source(config::File::from(user_path).required(false));
                }
            },
        }

        let config: Self = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        tracing::debug!("Loaded configuration: {config:?}");
        Ok(config)
    }

    /// Load configuration from the usual places, falling back to defaults
    pub fn load_or_default() -> Result<Self> {
        Self::load(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.storage.default_file, PathBuf::from("tickets.csv"));
        assert!(!config.storage.autoload);
        assert!(config.output.color);
    }

    #[test]
    #[serial]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[storage]\ndefault_file = \"desk.csv\"\nautoload = true\n\n[output]\ncolor = false\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.storage.default_file, PathBuf::from("desk.csv"));
        assert!(config.storage.autoload);
        assert!(!config.output.color);
    }

    #[test]
    #[serial]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\nautoload = true\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.storage.default_file, PathBuf::from("tickets.csv"));
        assert!(config.storage.autoload);
        assert!(config.output.color);
    }

    #[test]
    #[serial]
    fn test_missing_explicit_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = Config::load(Some(&temp_dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    #[serial]
    fn test_environment_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\ndefault_file = \"desk.csv\"\n").unwrap();

        // SAFETY: serialized with every other test that reads the environment
        unsafe { std::env::set_var("TICKET_DESK_STORAGE__DEFAULT_FILE", "from-env.csv") };
        let config = Config::load(Some(&path));
        unsafe { std::env::remove_var("TICKET_DESK_STORAGE__DEFAULT_FILE") };

        assert_eq!(
            config.unwrap().storage.default_file,
            PathBuf::from("from-env.csv")
        );
    }

    #[test]
    #[serial]
    fn test_load_or_default_reads_environment() {
        // SAFETY: serialized with every other test that reads the environment
        unsafe {
            std::env::set_var("TICKET_DESK_STORAGE__DEFAULT_FILE", "desk-env.csv");
            std::env::set_var("TICKET_DESK_OUTPUT__COLOR", "false");
        }
        let config = Config::load_or_default();
        unsafe {
            std::env::remove_var("TICKET_DESK_STORAGE__DEFAULT_FILE");
            std::env::remove_var("TICKET_DESK_OUTPUT__COLOR");
        }

        let config = config.unwrap();
        assert_eq!(config.storage.default_file, PathBuf::from("desk-env.csv"));
        assert!(!config.output.color);
    }
}
