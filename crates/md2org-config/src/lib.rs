use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Vault layout defaults, relative to the vault root.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_path: Option<String>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        config.daily_path = config.daily_path.map(|p| Self::expand_path(&p).unwrap_or(p));
        config.asset_path = config.asset_path.map(|p| Self::expand_path(&p).unwrap_or(p));

        Ok(Some(config))
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/md2org");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// `flag`, else the configured daily path. `None` when neither is set.
    pub fn resolve_daily_path(&self, flag: Option<&str>) -> Option<String> {
        Self::resolve(flag, self.daily_path.as_deref())
    }

    /// `flag`, else the configured asset path. `None` when neither is set.
    pub fn resolve_asset_path(&self, flag: Option<&str>) -> Option<String> {
        Self::resolve(flag, self.asset_path.as_deref())
    }

    fn resolve(flag: Option<&str>, configured: Option<&str>) -> Option<String> {
        flag.or(configured).map(str::to_string)
    }

    fn expand_path(path: &str) -> Option<String> {
        match shellexpand::full(path) {
            Ok(expanded) => Some(expanded.into_owned()),
            Err(_) => None,
        }
    }
}
