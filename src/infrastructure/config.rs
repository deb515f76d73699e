//! Configuration infrastructure
//!
//! Settings are layered with the `config` crate: built-in defaults, then an
//! optional config file, then `KLEINANZEIGEN__*` environment variables
//! (e.g. `KLEINANZEIGEN__CRAWL__MAX_PAGES=3`).

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::domain::SearchParam;
use crate::infrastructure::http_client::HttpClientConfig;
use crate::infrastructure::parsing::ParsingConfig;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "KLEINANZEIGEN";

/// Config file looked up when no explicit path is given
pub const DEFAULT_CONFIG_PATH: &str = "config/default";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config: {source}")]
    Load {
        #[from]
        source: config::ConfigError,
    },

    #[error("Configuration validation failed: {message}")]
    Validation { message: String },
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub http: HttpClientConfig,
    pub logging: LoggingConfig,
    pub parsing: ParsingConfig,
    pub crawl: CrawlConfig,
    pub search: SearchParam,
}

/// Paging behaviour of the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// Stop after this many result pages even if more exist
    pub max_pages: u32,

    /// Fetch the detail page of every listing
    pub fetch_records: bool,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_pages: defaults::MAX_PAGES,
            fetch_records: true,
        }
    }
}

/// Logging configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Enable JSON formatted logs
    pub json_format: bool,

    /// Enable console output (stderr, stdout carries the results)
    pub console_output: bool,

    /// Enable file output
    pub file_output: bool,

    /// Directory for log files, relative to the working directory
    pub directory: String,

    /// Log file name
    pub file_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.to_string(),
            json_format: defaults::LOG_JSON_FORMAT,
            console_output: defaults::LOG_CONSOLE_OUTPUT,
            file_output: defaults::LOG_FILE_OUTPUT,
            directory: defaults::LOG_DIRECTORY.to_string(),
            file_name: defaults::LOG_FILE_NAME.to_string(),
        }
    }
}

impl AppConfig {
    /// Load from `path` (extension optional, file may be missing) and the environment
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;

        info!("Configuration loaded from {}", path);
        Ok(config)
    }

    /// Load from a file that must exist
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.max_requests_per_minute == 0 {
            return Err(ConfigError::Validation {
                message: "http.max_requests_per_minute must be greater than 0".to_string(),
            });
        }

        if self.http.timeout_seconds == 0 {
            return Err(ConfigError::Validation {
                message: "http.timeout_seconds must be greater than 0".to_string(),
            });
        }

        if !self.logging.console_output && !self.logging.file_output {
            return Err(ConfigError::Validation {
                message: "at least one logging output must be enabled".to_string(),
            });
        }

        self.parsing
            .validate()
            .map_err(|e| ConfigError::Validation {
                message: e.to_string(),
            })
    }
}

/// Default values
pub mod defaults {
    /// Default maximum result pages per run
    pub const MAX_PAGES: u32 = 10;

    /// Default request timeout in seconds
    pub const REQUEST_TIMEOUT_SECONDS: u64 = 30;

    /// 40 reads per 60 seconds
    pub const MAX_REQUESTS_PER_MINUTE: u32 = 40;

    pub const USER_AGENT: &str =
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

    /// Default log level
    pub const LOG_LEVEL: &str = "info";

    /// Default JSON format setting
    pub const LOG_JSON_FORMAT: bool = false;

    /// Default console output setting
    pub const LOG_CONSOLE_OUTPUT: bool = true;

    /// Default file output setting
    pub const LOG_FILE_OUTPUT: bool = false;

    pub const LOG_DIRECTORY: &str = "logs";

    pub const LOG_FILE_NAME: &str = "kleinanzeigen-scraper.log";
}
