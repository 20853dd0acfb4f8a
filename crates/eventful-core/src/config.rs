//! Application configuration management.
//!
//! Configuration is stored at `~/.config/eventful/config.json` and names the
//! data file and default log level. `EVENTFUL_DATA_FILE` overrides the data
//! file location.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/data directory paths
const APP_NAME: &str = "eventful";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Data file name used when none is configured
const DATA_FILE: &str = "eventful.json";

/// Environment variable that overrides the data file path
pub const DATA_FILE_ENV: &str = "EVENTFUL_DATA_FILE";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub data_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Directory for the data file and logs.
    pub fn data_dir(&self) -> Result<PathBuf> {
        match self.data_file_path()?.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => Ok(parent.to_path_buf()),
            _ => Ok(PathBuf::from(".")),
        }
    }

    fn default_data_dir() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Ok(data_dir.join(APP_NAME))
    }

    /// Resolve the data file: environment override, then config, then default.
    pub fn data_file_path(&self) -> Result<PathBuf> {
        self.data_file_path_with(std::env::var_os(DATA_FILE_ENV).map(PathBuf::from))
    }

    fn data_file_path_with(&self, env_override: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = env_override.or_else(|| self.data_file.clone()) {
            return Ok(path);
        }
        Ok(Self::default_data_dir()?.join(DATA_FILE))
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("warn")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_override_wins() {
        let config = Config { data_file: Some(PathBuf::from("/tmp/from-config.json")), log_level: None };
        let path = config.data_file_path_with(Some(PathBuf::from("/tmp/from-env.json"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/from-env.json"));
    }

    #[test]
    fn test_config_file_used_without_override() {
        let config = Config { data_file: Some(PathBuf::from("/tmp/from-config.json")), log_level: None };
        let path = config.data_file_path_with(None).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/from-config.json"));
    }

    #[test]
    fn test_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.log_level(), "warn");
        assert!(config.data_file.is_none());
    }
}
