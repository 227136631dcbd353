//! Error types for the development tools.

use battle_core::error::BattleError;
use thiserror::Error;

/// Error type for tool operations.
#[derive(Error, Debug)]
pub enum ToolError {
    /// File or directory not found.
    #[error("Not found: {0}")]
    NotFound(String),
    /// Failed to read a file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
    /// Core parsing or resolution failed.
    #[error(transparent)]
    Battle(#[from] BattleError),
    /// An inline army could not be parsed.
    #[error("Invalid army '{0}': expected KNIGHTS,PALADINS,CROSSBOWMEN")]
    InvalidArmy(String),
    /// One or more data files failed validation.
    #[error("{0} validation error(s)")]
    ValidationFailed(usize),
    /// JSON output failed.
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for tool operations.
pub type Result<T> = std::result::Result<T, ToolError>;
