//! Error types for the configuration system

use thiserror::Error;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration parsing failed
    #[error("Failed to parse configuration: {source}")]
    ParseError {
        #[source]
        source: Box<figment::Error>,
    },

    /// Configuration validation failed
    #[error("Configuration validation failed: {message}")]
    ValidationError { message: String },

    /// Home directory could not be determined
    #[error("Unable to determine home directory")]
    HomeDirectoryNotFound,
}

impl ConfigError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::ParseError {
            source: Box::new(error),
        }
    }
}
