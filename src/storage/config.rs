//! Configuration handling for taskman
//!
//! Storage locations are defined per environment in
//! `config/task_manager.toml` under the working root:
//!
//! ```toml
//! [development]
//! storage_path = "data/tasks.json"
//!
//! [test]
//! storage_path = "tmp/tasks_test.json"
//! ```
//!
//! The configuration is resolved once at startup and handed to
//! [`crate::TaskManager::new`]; nothing below it reads the environment.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Environment used when none is given
pub const DEFAULT_ENV: &str = "development";

/// Config file location relative to the root
pub const CONFIG_FILE: &str = "config/task_manager.toml";

/// Settings for one environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub storage_path: PathBuf,
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub env: String,
    pub storage_path: PathBuf,
}

impl Config {
    /// Builds a configuration pointing straight at a storage file
    pub fn new(env: impl Into<String>, storage_path: impl Into<PathBuf>) -> Self {
        Self {
            env: env.into(),
            storage_path: storage_path.into(),
        }
    }

    /// Resolves the storage path for `env` under `root`.
    ///
    /// `data_path` wins when given; otherwise the environment's entry in the
    /// config file is used, and without a config file the default
    /// `data/tasks_<env>.json`.
    pub fn resolve(root: &Path, env: Option<&str>, data_path: Option<&Path>) -> Result<Self> {
        let env = env
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .unwrap_or(DEFAULT_ENV)
            .to_string();

        let storage_path = match data_path {
            Some(path) => path.to_path_buf(),
            None => match Self::load_environment(root, &env)? {
                Some(entry) => entry.storage_path,
                None => Self::default_storage_path(&env),
            },
        };

        let storage_path = if storage_path.is_absolute() {
            storage_path
        } else {
            root.join(storage_path)
        };

        debug!(env = %env, path = %storage_path.display(), "resolved configuration");
        Ok(Self { env, storage_path })
    }

    /// Path of the config file under `root`
    pub fn config_path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE)
    }

    fn default_storage_path(env: &str) -> PathBuf {
        PathBuf::from("data").join(format!("tasks_{}.json", env))
    }

    /// Reads the entry for `env`; `None` when there is no config file
    fn load_environment(root: &Path, env: &str) -> Result<Option<EnvironmentConfig>> {
        let config_path = Self::config_path(root);
        if !config_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&config_path)?;
        let mut environments: HashMap<String, EnvironmentConfig> = toml::from_str(&content)
            .map_err(|e| {
                Error::Config(format!("Failed to parse {}: {}", config_path.display(), e))
            })?;

        environments
            .remove(env)
            .map(Some)
            .ok_or_else(|| Error::Config(format!("Missing configuration for '{}' environment", env)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) {
        let path = Config::config_path(dir.path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn default_without_config_file() {
        let dir = TempDir::new().unwrap();
        let config = Config::resolve(dir.path(), None, None).unwrap();

        assert_eq!(config.env, DEFAULT_ENV);
        assert_eq!(
            config.storage_path,
            dir.path().join("data").join("tasks_development.json")
        );
    }

    #[test]
    fn loads_environment_entry() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            r#"
[development]
storage_path = "data/tasks.json"

[test]
storage_path = "tmp/tasks_test.json"
"#,
        );

        let config = Config::resolve(dir.path(), Some("test"), None).unwrap();
        assert_eq!(config.env, "test");
        assert!(config.storage_path.ends_with("tmp/tasks_test.json"));
        assert!(config.storage_path.starts_with(dir.path()));
    }

    #[test]
    fn missing_environment_is_error() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[development]\nstorage_path = \"tasks.json\"\n");

        let err = Config::resolve(dir.path(), Some("missing"), None).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("Missing configuration"));
    }

    #[test]
    fn malformed_config_is_error() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[development\nstorage_path = ");

        let err = Config::resolve(dir.path(), None, None).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn data_path_overrides_config_file() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[development]\nstorage_path = \"tasks.json\"\n");

        let override_path = dir.path().join("elsewhere.json");
        let config = Config::resolve(dir.path(), None, Some(override_path.as_path())).unwrap();
        assert_eq!(config.storage_path, override_path);
    }

    #[test]
    fn absolute_paths_are_kept() {
        let dir = TempDir::new().unwrap();
        let absolute = dir.path().join("abs").join("tasks.json");
        write_config(
            &dir,
            &format!("[development]\nstorage_path = {:?}\n", absolute.display().to_string()),
        );

        let config = Config::resolve(dir.path(), None, None).unwrap();
        assert_eq!(config.storage_path, absolute);
    }
}
