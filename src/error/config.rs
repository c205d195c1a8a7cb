//! Configuration errors.

use crate::models::ParseModeError;

/// Invalid configuration from the environment or command line.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid mode in {source_name}: {error}")]
    InvalidMode {
        source_name: String,
        #[source]
        error: ParseModeError,
    },

    #[error("invalid theme '{0}' (expected dark or light)")]
    InvalidTheme(String),

    #[error("endpoint URL must start with http:// or https://, got '{0}'")]
    InvalidUrl(String),

    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("unknown argument '{0}'")]
    UnknownArgument(String),
}
