//! Application configuration loaded from a RON file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use search_core::PriceFormat;
use search_engine::ClientSettings;
use search_logging::{LevelFilter, LogDestination, DEFAULT_LOG_FILE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "search_app.ron";
pub const CONFIG_ENV_VAR: &str = "SHOP_SEARCH_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TableOutput {
    #[default]
    Text,
    Html,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogTarget {
    #[default]
    File,
    Terminal,
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceFormatConfig {
    pub group_separator: String,
    pub decimal_separator: String,
    pub max_fraction_digits: usize,
    pub currency_suffix: String,
}

impl Default for PriceFormatConfig {
    fn default() -> Self {
        let format = PriceFormat::default();
        Self {
            group_separator: format.group_separator,
            decimal_separator: format.decimal_separator,
            max_fraction_digits: format.max_fraction_digits,
            currency_suffix: format.currency_suffix,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub search_path: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: Option<u64>,
    pub max_bytes: u64,
    pub price_format: PriceFormatConfig,
    pub table_output: TableOutput,
    pub log_target: LogTarget,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let client = ClientSettings::default();
        Self {
            base_url: client.base_url,
            search_path: client.search_path,
            connect_timeout_secs: client.connect_timeout.as_secs(),
            request_timeout_secs: client.request_timeout.map(|timeout| timeout.as_secs()),
            max_bytes: client.max_bytes,
            price_format: PriceFormatConfig::default(),
            table_output: TableOutput::default(),
            log_target: LogTarget::default(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.base_url.clone(),
            search_path: self.search_path.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            max_bytes: self.max_bytes,
        }
    }

    pub fn price_format(&self) -> PriceFormat {
        PriceFormat {
            group_separator: self.price_format.group_separator.clone(),
            decimal_separator: self.price_format.decimal_separator.clone(),
            max_fraction_digits: self.price_format.max_fraction_digits,
            currency_suffix: self.price_format.currency_suffix.clone(),
        }
    }

    pub fn log_destination(&self) -> LogDestination {
        match self.log_target {
            LogTarget::File => LogDestination::File(self.log_file.clone()),
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both(self.log_file.clone()),
        }
    }

    /// Parsed log level; unknown names fall back to `Info`.
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

/// Config file location: `$SHOP_SEARCH_CONFIG` or `./search_app.ron`.
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Load configuration; a missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
