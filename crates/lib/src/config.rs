//! # Scraper Configuration
//!
//! `ScraperConfig` is resolved from three layers: built-in defaults, an optional
//! YAML file and `REMOTEJOBS_`-prefixed environment variables (a `.env` file is
//! loaded first when present).

use crate::constants::{DEFAULT_API_URL, DEFAULT_BASE_URL, DEFAULT_LOG_FILE, DEFAULT_USER_AGENT};
use crate::errors::ConfigError;
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ScraperConfig {
    /// The JSON feed to fetch.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// The site root used when building job URLs.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Per-request timeout. Not extended between attempts.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Base delay after a network failure, multiplied by the attempt number.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    /// Wait unit after an HTTP 429, multiplied by the attempt number.
    #[serde(default = "default_rate_limit_backoff_ms")]
    pub rate_limit_backoff_ms: u64,
    /// Pause between fetching and processing.
    #[serde(default = "default_courtesy_delay_ms")]
    pub courtesy_delay_ms: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_max_retries() -> u32 {
    3
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_retry_delay_ms() -> u64 {
    1000
}

fn default_rate_limit_backoff_ms() -> u64 {
    5000
}

fn default_courtesy_delay_ms() -> u64 {
    1000
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_log_file() -> String {
    DEFAULT_LOG_FILE.to_string()
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            base_url: default_base_url(),
            max_retries: default_max_retries(),
            timeout_secs: default_timeout_secs(),
            retry_delay_ms: default_retry_delay_ms(),
            rate_limit_backoff_ms: default_rate_limit_backoff_ms(),
            courtesy_delay_ms: default_courtesy_delay_ms(),
            user_agent: default_user_agent(),
            log_file: default_log_file(),
        }
    }
}

impl ScraperConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn courtesy_delay(&self) -> Duration {
        Duration::from_millis(self.courtesy_delay_ms)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            retry_delay: Duration::from_millis(self.retry_delay_ms),
            rate_limit_backoff: Duration::from_millis(self.rate_limit_backoff_ms),
        }
    }
}

/// Bounds and delays for the fetch loop. Both delays grow linearly with the
/// attempt number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub retry_delay: Duration,
    pub rate_limit_backoff: Duration,
}

impl RetryPolicy {
    /// Wait after an HTTP 429 on the given 1-based attempt.
    pub fn rate_limit_wait(&self, attempt: u32) -> Duration {
        self.rate_limit_backoff.saturating_mul(attempt)
    }

    /// Wait after a network failure on the given 1-based attempt.
    pub fn network_wait(&self, attempt: u32) -> Duration {
        self.retry_delay.saturating_mul(attempt)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        ScraperConfig::default().retry_policy()
    }
}

/// Loads the configuration, layering an optional YAML file and the environment
/// over the defaults.
pub fn get_config(config_path: Option<&str>) -> Result<ScraperConfig, ConfigError> {
    dotenvy::dotenv().ok();

    let mut builder = ConfigBuilder::builder();

    if let Some(path) = config_path {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ConfigError::NotFound(path.to_string()));
            }
            Err(e) => return Err(ConfigError::General(config::ConfigError::Foreign(Box::new(e)))),
        };
        info!("Loading configuration from '{path}'.");
        builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
    }

    let settings = builder
        .add_source(
            Environment::with_prefix("REMOTEJOBS")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
