use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

pub mod defaults;

use crate::errors::ConfigError;
use crate::ingestor::DatasetFormat;
use defaults::*;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    /// Bind address, e.g. `localhost:8000`. Usually supplied via `ADDR`.
    pub addr: Option<String>,
    #[serde(default = "default_request_logging")]
    pub request_logging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
    /// Explicit format; inferred from `path` when absent
    pub format: Option<DatasetFormat>,
    /// Capacity hint for the loader
    #[serde(default = "default_expected_records")]
    pub expected_records: usize,
}

fn default_request_logging() -> bool {
    DEFAULT_REQUEST_LOGGING
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATASET_PATH)
}

fn default_expected_records() -> usize {
    DEFAULT_EXPECTED_RECORDS
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            addr: None,
            request_logging: default_request_logging(),
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            format: None,
            expected_records: default_expected_records(),
        }
    }
}

impl Config {
    /// Built-in defaults, overlaid with `config_file` when given
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        match config_file {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_file(config_file: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(config_file).map_err(|source| ConfigError::Read {
                path: config_file.to_path_buf(),
                source,
            })?;
        let config = toml::from_str(&contents)?;
        info!("Configuration loaded from: {}", config_file.display());
        Ok(config)
    }

    /// Overlay values from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Overlay values from an environment lookup. Empty values are ignored.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(addr) = var(ENV_ADDR) {
            self.web.addr = Some(addr);
        }
        if let Some(path) = var(ENV_DATASET) {
            self.dataset.path = PathBuf::from(path);
        }
        if let Some(format) = var(ENV_DATASET_FORMAT) {
            self.dataset.format = Some(format.parse()?);
        }
        Ok(())
    }

    /// The bind address; startup cannot proceed without one
    pub fn bind_addr(&self) -> Result<&str, ConfigError> {
        match self.web.addr.as_deref() {
            Some(addr) if !addr.trim().is_empty() => Ok(addr),
            _ => Err(ConfigError::MissingAddr),
        }
    }
}
