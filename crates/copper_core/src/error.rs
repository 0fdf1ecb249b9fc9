//! Unified error types for copper_core

use thiserror::Error;

/// Main error type for domain validation failures
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid element name: '{name}'")]
    InvalidElementName { name: String },

    #[error("Invalid version: '{input}'")]
    InvalidVersion { input: String },

    #[error("Invalid component prefix: '{prefix}'")]
    InvalidPrefix { prefix: String },

    #[error("{0}")]
    Generic(String),
}

/// Result type alias using CoreError
pub type Result<T> = std::result::Result<T, CoreError>;
