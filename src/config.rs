//! Startup configuration.
//!
//! Resolved once before the TUI starts: defaults, then environment, then
//! command-line flags.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::models::Mode;
use crate::rewrite::DEFAULT_ENDPOINT;
use crate::state::Theme;

pub const ENV_URL: &str = "ASSIGNMATE_URL";
pub const ENV_MODE: &str = "ASSIGNMATE_MODE";
pub const ENV_THEME: &str = "ASSIGNMATE_THEME";
pub const ENV_LOG: &str = "ASSIGNMATE_LOG";
pub const ENV_LOG_FILE: &str = "ASSIGNMATE_LOG_FILE";

/// Configuration for one run.
///
/// # Example
///
/// ```
/// use assignmate::config::AppConfig;
/// use assignmate::models::Mode;
///
/// let config = AppConfig::default()
///     .with_endpoint("http://localhost:8080/api/rewrite")
///     .with_mode(Mode::Academic);
/// assert_eq!(config.mode, Mode::Academic);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Rewrite endpoint URL
    pub endpoint: String,
    /// Initial mode
    pub mode: Mode,
    /// Initial theme
    pub theme: Theme,
    /// `EnvFilter` directive; logging is off when `None`
    pub log_filter: Option<String>,
    /// Log file override
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            mode: Mode::default(),
            theme: Theme::default(),
            log_filter: None,
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get(ENV_URL) {
            config.endpoint = validate_url(&url)?;
        }
        if let Some(mode) = get(ENV_MODE) {
            config.mode = mode.parse().map_err(|error| ConfigError::InvalidMode {
                source_name: ENV_MODE.to_string(),
                error,
            })?;
        }
        if let Some(theme) = get(ENV_THEME) {
            config.theme = theme.parse()?;
        }
        config.log_filter = get(ENV_LOG);
        config.log_file = get(ENV_LOG_FILE).map(PathBuf::from);

        Ok(config)
    }
}

/// Accept only absolute http(s) URLs with a host. Returns the trimmed input.
pub fn validate_url(url: &str) -> Result<String, ConfigError> {
    let url = url.trim();
    let valid = reqwest::Url::parse(url).is_ok_and(|parsed| {
        matches!(parsed.scheme(), "http" | "https")
            && parsed.host_str().is_some_and(|host| !host.is_empty())
    });
    if valid {
        Ok(url.to_string())
    } else {
        Err(ConfigError::InvalidUrl(url.to_string()))
    }
}
