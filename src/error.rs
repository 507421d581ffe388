//! Error types for gitshelf
//!
//! This module defines the error hierarchy used throughout the crate.
//! We use `thiserror` for library-style errors that are part of the API;
//! the binary converts them through `anyhow` at the boundary.
//!
//! Access decisions are deliberately infallible: a missing grant is a
//! `false`, never an error.

use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Listing filter error: {0}")]
    Filter(#[from] FilterError),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Missing required configuration: {field}")]
    Missing { field: String },

    #[error("Invalid regex pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Listing filter errors
///
/// A malformed name pattern is surfaced to the caller; the engine never
/// falls back to literal substring matching.
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid name filter '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl FilterError {
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        FilterError::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for listing operations
pub type FilterResult<T> = std::result::Result<T, FilterError>;
