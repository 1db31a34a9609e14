use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised while resolving settings from the environment
///
/// Every variant is fatal: a deployment with a malformed value must not
/// start with a silently substituted default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: expected an integer port, got '{value}'")]
    InvalidInteger {
        key: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Environment variable {key} is not valid unicode")]
    NotUnicode { key: String },
}

impl ConfigError {
    /// Name of the environment variable that caused the failure
    pub fn key(&self) -> &str {
        match self {
            Self::InvalidInteger { key, .. } | Self::NotUnicode { key } => key,
        }
    }
}
