//! Application configuration.
//!
//! Everything comes from the process environment. Only the provider
//! credential is required; the rest have defaults.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

/// Required provider credential.
pub const ENV_API_KEY: &str = "API_KEY";
/// Model name override.
pub const ENV_MODEL: &str = "MINDSPOKE_MODEL";
/// Provider base URL override (used by tests and proxies).
pub const ENV_API_BASE: &str = "MINDSPOKE_API_BASE";
/// Request timeout in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "MINDSPOKE_TIMEOUT_SECS";
/// Directory where shared images are saved.
pub const ENV_SHARE_DIR: &str = "MINDSPOKE_SHARE_DIR";
/// `tracing` filter directive.
pub const ENV_LOG: &str = "MINDSPOKE_LOG";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_FILTER: &str = "mindspoke=info";

/// Resolved configuration.
///
/// Build it with [`AppConfig::from_env`] in the binary, or with
/// [`AppConfig::new`] and the `with_*` setters in tests.
#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Provider API key (never logged)
    pub api_key: String,
    pub model: String,
    /// Base URL without trailing slash
    pub api_base: String,
    pub request_timeout: Duration,
    /// Overrides the native share directory when set
    pub share_dir: Option<PathBuf>,
    pub log_filter: String,
}

impl AppConfig {
    /// Create a config with defaults for everything but the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            share_dir: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_share_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.share_dir = Some(dir.into());
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingApiKey`] if `API_KEY` is unset or blank, and
    /// [`ConfigError::InvalidValue`] for an unparseable timeout.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_blank(ENV_API_KEY).ok_or(ConfigError::MissingApiKey)?;
        let mut config = Self::new(api_key.trim());

        if let Some(model) = non_blank(ENV_MODEL) {
            config = config.with_model(model.trim());
        }
        if let Some(base) = non_blank(ENV_API_BASE) {
            config = config.with_api_base(base.trim());
        }
        if let Some(raw) = non_blank(ENV_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: ENV_TIMEOUT_SECS,
                    value: raw.clone(),
                    reason: "expected a positive whole number of seconds".to_string(),
                })?;
            config = config.with_request_timeout(Duration::from_secs(secs));
        }
        if let Some(dir) = non_blank(ENV_SHARE_DIR) {
            config = config.with_share_dir(dir.trim());
        }
        if let Some(filter) = non_blank(ENV_LOG) {
            config = config.with_log_filter(filter.trim());
        }

        Ok(config)
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("request_timeout", &self.request_timeout)
            .field("share_dir", &self.share_dir)
            .field("log_filter", &self.log_filter)
            .finish()
    }
}
