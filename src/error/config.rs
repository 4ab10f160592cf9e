//! Startup configuration errors.

use thiserror::Error;

/// Configuration problems detected before the UI starts.
///
/// These are never recovered at runtime: `main` prints them and exits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The provider credential is absent or blank.
    #[error("API_KEY environment variable not set")]
    MissingApiKey,

    /// An optional setting is present but unusable.
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::MissingApiKey => "E_CFG_API_KEY",
            ConfigError::InvalidValue { .. } => "E_CFG_INVALID",
        }
    }

    /// Hint printed under the error on stderr.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ConfigError::MissingApiKey => {
                "Set API_KEY to your Google Generative Language API key and start again."
            }
            ConfigError::InvalidValue { .. } => "Fix or unset the variable and start again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ConfigError::MissingApiKey.to_string(),
            "API_KEY environment variable not set"
        );
        let err = ConfigError::InvalidValue {
            key: "MINDSPOKE_TIMEOUT_SECS",
            value: "soon".to_string(),
            reason: "expected a whole number of seconds".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for MINDSPOKE_TIMEOUT_SECS: 'soon' (expected a whole number of seconds)"
        );
    }
}
