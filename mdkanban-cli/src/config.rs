//! Layered configuration using Figment
//!
//! Sources in precedence order (later sources override earlier ones):
//! 1. Default values
//! 2. Global file `~/.mdkanban/config.{toml,yaml,yml,json}`
//! 3. Project file `./.mdkanban/config.{toml,yaml,yml,json}`
//! 4. Environment variables prefixed `MDKANBAN_`
//! 5. Command line flags

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

/// Name of the configuration directory, both global and per project
pub const CONFIG_DIR_NAME: &str = ".mdkanban";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "MDKANBAN_";

/// Recognised file names, lowest precedence first
const CONFIG_FILES: [&str; 4] = ["config.json", "config.yml", "config.yaml", "config.toml"];

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration parsing failed
    #[error("Failed to parse configuration: {source}")]
    ParseError { source: figment::Error },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::ParseError { source: error }
    }
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Effective settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Board file used when `--board` is not given
    pub board: PathBuf,
    /// Log filter used when neither `--debug` nor `RUST_LOG` is set
    pub log_level: String,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board: PathBuf::from("tasks.md"),
            log_level: "warn".to_string(),
            pretty: true,
        }
    }
}

/// Values given on the command line; unset fields leave lower layers alone
#[derive(Debug, Clone, Default, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretty: Option<bool>,
}

/// Configuration provider using figment
///
/// Nothing is cached; every call reads the files and environment afresh.
#[derive(Debug, Clone)]
pub struct ConfigProvider {
    global_dir: Option<PathBuf>,
    project_dir: Option<PathBuf>,
}

impl ConfigProvider {
    /// Provider searching `~/.mdkanban/` and `./.mdkanban/`
    pub fn new() -> Self {
        Self {
            global_dir: dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME)),
            project_dir: std::env::current_dir()
                .ok()
                .map(|cwd| cwd.join(CONFIG_DIR_NAME)),
        }
    }

    /// Provider searching explicit directories
    pub fn with_dirs(global_dir: Option<PathBuf>, project_dir: Option<PathBuf>) -> Self {
        Self {
            global_dir,
            project_dir,
        }
    }

    /// Merge every source and extract the settings
    pub fn load(&self, overrides: &Overrides) -> ConfigResult<Settings> {
        let settings: Settings = self
            .build_figment()
            .merge(Serialized::defaults(overrides))
            .extract()?;
        debug!(?settings, "loaded configuration");
        Ok(settings)
    }

    fn build_figment(&self) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()));
        for dir in [&self.global_dir, &self.project_dir].into_iter().flatten() {
            figment = Self::merge_dir(figment, dir);
        }
        figment.merge(Env::prefixed(ENV_PREFIX).map(|key| key.as_str().to_lowercase().into()))
    }

    fn merge_dir(mut figment: Figment, dir: &Path) -> Figment {
        for name in CONFIG_FILES {
            let path = dir.join(name);
            if !path.is_file() {
                continue;
            }
            trace!("Loading config file: {}", path.display());
            figment = match path.extension().and_then(|e| e.to_str()) {
                Some("toml") => figment.merge(Toml::file(&path)),
                Some("json") => figment.merge(Json::file(&path)),
                _ => figment.merge(Yaml::file(&path)),
            };
        }
        figment
    }
}

impl Default for ConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}
