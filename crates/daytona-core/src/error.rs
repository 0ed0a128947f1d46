//! Error types for the Daytona server configuration layer

use std::path::PathBuf;

/// Daytona configuration error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot resolve user config directory: {0}")]
    Environment(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Failed to decode config file {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode config: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Invalid identifier: {0:?}")]
    InvalidId(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for Daytona
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::ConfigError(msg.into())
    }

    pub fn environment<S: Into<String>>(msg: S) -> Self {
        Error::Environment(msg.into())
    }

    /// True when the error only says the config file has not been written yet
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::ConfigNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ConfigNotFound(PathBuf::from("/tmp/daytona/server/config.json"));
        assert_eq!(
            err.to_string(),
            "Config file not found: /tmp/daytona/server/config.json"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::IoError(_)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_invalid_id_display() {
        let err = Error::InvalidId("../etc".to_string());
        assert_eq!(err.to_string(), "Invalid identifier: \"../etc\"");
    }
}
