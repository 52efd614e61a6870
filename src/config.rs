use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use validator::Validate;

pub const DEFAULT_MODEL: &str = "hf.co/distil-labs/Llama-3_2-gitara-3B";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:11434/v1";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors),
    #[error("{var} must be a number, got {value:?}")]
    BadEnv { var: &'static str, value: String },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default, Validate)]
pub struct Config {
    #[serde(default)]
    #[validate]
    pub model: ModelConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
#[serde(default)]
pub struct ModelConfig {
    #[validate(length(min = 1, message = "Model name cannot be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "Base URL cannot be empty"))]
    pub base_url: String,
    /// Sent as a bearer token. Local servers accept any value.
    pub api_key: String,
    #[validate(range(min = 1, max = 3600, message = "Timeout must be between 1 and 3600 seconds"))]
    pub timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: "EMPTY".to_string(),
            timeout_secs: 60,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub color_output: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color_output: true }
    }
}

impl Config {
    pub fn create_default(path: &Path) -> Result<Self, ConfigError> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the config at `path` (or the default location), writing a default
    /// file first if none exists. Environment overrides are applied and the
    /// result validated.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => get_config_path()?,
        };

        let mut config = if path.exists() {
            debug!(path = %path.display(), "loading config");
            Self::load(&path)?
        } else {
            info!(path = %path.display(), "creating default config");
            Self::create_default(&path)?
        };

        config.apply_env(|var| std::env::var(var).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `GITARA_*` overrides using `lookup` to read variables.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("GITARA_MODEL") {
            self.model.name = name;
        }
        if let Some(url) = lookup("GITARA_BASE_URL") {
            self.model.base_url = url;
        }
        if let Some(key) = lookup("GITARA_API_KEY") {
            self.model.api_key = key;
        }
        if let Some(value) = lookup("GITARA_TIMEOUT_SECS") {
            self.model.timeout_secs = value.trim().parse().map_err(|_| ConfigError::BadEnv {
                var: "GITARA_TIMEOUT_SECS",
                value,
            })?;
        }
        Ok(())
    }
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("com", "gitara", "gitara").ok_or(ConfigError::NoConfigDir)?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.model.name, DEFAULT_MODEL);
        assert_eq!(config.model.base_url, "http://127.0.0.1:11434/v1");
        assert_eq!(config.model.api_key, "EMPTY");
        assert!(config.display.color_output);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_resolve_creates_default_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config::resolve(Some(&path)).unwrap();
        assert!(path.exists());
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[display]\ncolor_output = false\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert!(!config.display.color_output);
        assert_eq!(config.model, ModelConfig::default());
    }

    #[test]
    fn test_load_partial_model_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[model]\nname = \"gitara:3b\"\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.model.name, "gitara:3b");
        assert_eq!(config.model.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[model\nname = ").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_validation_rejects_empty_model_and_zero_timeout() {
        let mut config = Config::default();
        config.model.name.clear();
        config.model.timeout_secs = 0;
        assert!(config.validate().is_err());
        let err = config.model.validate().unwrap_err();
        let fields = err.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("timeout_secs"));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("GITARA_MODEL", "gitara:latest"),
            ("GITARA_BASE_URL", "http://localhost:8080/v1"),
            ("GITARA_TIMEOUT_SECS", "5"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_env(|var| env.get(var).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.model.name, "gitara:latest");
        assert_eq!(config.model.base_url, "http://localhost:8080/v1");
        assert_eq!(config.model.api_key, "EMPTY");
        assert_eq!(config.model.timeout_secs, 5);
    }

    #[test]
    fn test_env_timeout_must_be_numeric() {
        let mut config = Config::default();
        let result = config.apply_env(|var| {
            (var == "GITARA_TIMEOUT_SECS").then(|| "soon".to_string())
        });
        assert!(matches!(result, Err(ConfigError::BadEnv { .. })));
    }
}
