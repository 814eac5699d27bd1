//! Error types for waribiki

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fare table error: {0}")]
    Table(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("No fare registered between {from} and {to}")]
    UnknownRoute { from: String, to: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: Error = ConfigError::ParseError("bad json".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Failed to parse configuration: bad json"
        );
    }

    #[test]
    fn test_unknown_route_message() {
        let err = Error::UnknownRoute {
            from: "東京".to_string(),
            to: "札幌".to_string(),
        };
        assert_eq!(err.to_string(), "No fare registered between 東京 and 札幌");
    }
}
