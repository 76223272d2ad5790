//! Error types and utilities for Wabot

use thiserror::Error;

/// Result type alias for Wabot operations
pub type Result<T> = std::result::Result<T, WabotError>;

/// Main error type for Wabot operations
#[derive(Error, Debug)]
pub enum WabotError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File watching errors
    #[error("Watch error: {message}")]
    Watch {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl WabotError {
    /// Create a configuration error with a custom message
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a configuration error with a message and source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a watch error with a message and source
    pub fn watch_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Watch {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = WabotError::config("missing override file");
        assert_eq!(err.to_string(), "Configuration error: missing override file");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: WabotError = io_err.into();
        assert!(matches!(err, WabotError::Io(_)));
    }

    #[test]
    fn test_error_source_chain() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = WabotError::watch_with_source("cannot arm watcher", io_err);
        assert!(std::error::Error::source(&err).is_some());
    }
}
