use crate::error::{AppError, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

/// Environment variable naming an optional configuration file
pub const CONFIG_PATH_ENV: &str = "DIRECTORY_CONFIG_PATH";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Config {
    /// External search service
    #[validate(nested)]
    pub search_service: SearchServiceConfig,

    /// Directory business settings
    #[validate(nested)]
    pub directory: DirectoryConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Load configuration from defaults, the file named by `DIRECTORY_CONFIG_PATH`
    /// and `DIRECTORY__*` environment variables
    pub fn load() -> Result<Self> {
        let config_path = std::env::var(CONFIG_PATH_ENV).ok();
        Self::load_from(config_path.as_deref().map(Path::new))
    }

    /// Load configuration with an explicit optional file
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder()
            // Start with default values
            .add_source(config::File::from_str(
                include_str!("../config/default.toml"),
                config::FileFormat::Toml,
            ));

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config: Config = builder
            // Override with environment variables (prefix: DIRECTORY__)
            .add_source(
                config::Environment::with_prefix("DIRECTORY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        config.time_zone()?;

        Ok(config)
    }

    /// Server time zone used to decide what "today" is
    pub fn time_zone(&self) -> Result<Tz> {
        self.directory.time_zone.parse::<Tz>().map_err(|e| {
            AppError::Configuration(format!(
                "unknown time zone '{}': {}",
                self.directory.time_zone, e
            ))
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchServiceConfig {
    /// gRPC endpoint, e.g. `http://search:50051`
    #[validate(url)]
    pub endpoint: String,

    /// Connect timeout (seconds)
    #[serde(default = "default_connect_timeout")]
    #[validate(range(min = 1, max = 300))]
    pub connect_timeout_secs: u64,

    /// Per-request deadline (seconds)
    #[serde(default = "default_request_timeout")]
    #[validate(range(min = 1, max = 300))]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DirectoryConfig {
    /// IANA time zone name
    #[serde(default = "default_time_zone")]
    #[validate(length(min = 1))]
    pub time_zone: String,

    /// Page size for searches that leave `limit` unset
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 1000))]
    pub default_limit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON log lines
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_request_timeout() -> u64 {
    10
}

fn default_time_zone() -> String {
    "Europe/Moscow".to_string()
}

fn default_limit() -> u32 {
    crate::directory::DEFAULT_LIMIT
}

fn default_log_level() -> String {
    "employee_directory=info".to_string()
}
