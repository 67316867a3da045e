//! Configuration errors.

use thiserror::Error;

/// Malformed configuration read from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The variable is set but is not a non-negative integer.
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    /// The variable must be strictly positive.
    #[error("{var} must be greater than zero")]
    Zero { var: &'static str },
}

impl ConfigError {
    /// Name of the offending environment variable.
    pub fn var(&self) -> &'static str {
        match self {
            ConfigError::InvalidNumber { var, .. } | ConfigError::Zero { var } => var,
        }
    }

    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidNumber { .. } => "CONFIG_INVALID_NUMBER",
            ConfigError::Zero { .. } => "CONFIG_ZERO",
        }
    }
}
