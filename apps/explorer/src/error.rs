//! Custom error types for Explorer
//!
//! This module provides a unified error type shared by the launcher,
//! the resource adapter and the preference store.

use thiserror::Error;

/// Main error type for Explorer operations
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// The OS refused or failed to start the file manager
    #[error("Failed to launch '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The resource to reveal does not exist
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// IO-related errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExplorerError {
    /// Create a launch error for the given command line
    pub fn launch(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Launch {
            command: command.into(),
            source,
        }
    }

    /// Create a not found error
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound(path.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error came from the process launcher
    pub fn is_launch_failure(&self) -> bool {
        matches!(self, Self::Launch { .. })
    }
}

/// Result type alias using ExplorerError
pub type Result<T> = std::result::Result<T, ExplorerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_launch_error() {
        let err = ExplorerError::launch(
            "nautilus /home/u",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(
            err.to_string(),
            "Failed to launch 'nautilus /home/u': no such file"
        );
        assert!(err.is_launch_failure());
    }

    #[test]
    fn test_not_found_error() {
        let err = ExplorerError::not_found("/missing");
        assert_eq!(err.to_string(), "Resource not found: /missing");
        assert!(!err.is_launch_failure());
    }

    #[test]
    fn test_config_error() {
        let err = ExplorerError::config("no home directory");
        assert_eq!(err.to_string(), "Configuration error: no home directory");
    }
}
