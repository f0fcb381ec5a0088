//! Engine error types
//!
//! The analysis functions themselves are total and never return errors.
//! Only the boundaries that touch files or configuration are fallible.

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur while loading configuration or node data
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration value out of range
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to read a file or directory
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse configuration TOML
    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Failed to parse node JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Node data that parsed but cannot be used
    #[error("Invalid node: {0}")]
    InvalidNode(String),
}
