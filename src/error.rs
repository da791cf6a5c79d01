//! Error types for Folio
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur while building the page
#[derive(Debug, Error)]
pub enum FolioError {
    /// Template registration or rendering failed
    #[error("Template error: {0}")]
    Template(String),

    /// Theme colour is not a `#RRGGBB` hex value
    #[error("Invalid theme colour: {0}")]
    InvalidTheme(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for Folio operations
pub type Result<T> = std::result::Result<T, FolioError>;
