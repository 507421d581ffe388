//! Configuration types for gitshelf
//!
//! This module defines the configuration structure that can be loaded from
//! TOML files and/or environment variables.

use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Listing behavior
    pub listing: ListingConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Listing behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Maximum recency window, in days, a request may ask for.
    ///
    /// Wider requests are clamped to this value; 0 or negative disables
    /// clamping.
    pub activity_duration_maximum: i64,

    /// Number of projects shown in the navigation menu before the list is
    /// truncated to the most recently active
    pub project_menu_limit: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            activity_duration_maximum: 30,
            project_menu_limit: 15,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Output format (pretty, json)
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output
    #[default]
    Pretty,
    /// JSON structured output
    Json,
}
