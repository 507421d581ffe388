//! Configuration loader with layered sources
//!
//! Loads configuration from multiple sources with the following precedence
//! (highest to lowest):
//! 1. Environment variables (GITSHELF_*)
//! 2. Configuration file (TOML)
//! 3. Default values

use crate::config::types::AppConfig;
use crate::error::ConfigError;
use config::{Config, Environment, File, FileFormat};
use std::path::Path;

/// Default configuration file paths to check (in order)
const DEFAULT_CONFIG_PATHS: &[&str] = &[
    "gitshelf.toml",
    ".gitshelf.toml",
    "~/.config/gitshelf/config.toml",
    "/etc/gitshelf/config.toml",
];

/// Load configuration from a TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from_str(toml_str, FileFormat::Toml))
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Load configuration from files and environment
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. Start with defaults (handled by serde defaults on AppConfig)

    // 2. Add configuration file
    if let Some(path) = config_path {
        // Explicit path provided - must exist
        if !Path::new(path).exists() {
            return Err(ConfigError::Load(format!(
                "Configuration file not found: {}",
                path
            )));
        }
        builder = builder.add_source(File::new(path, FileFormat::Toml));
    } else {
        // Try default paths (first existing one wins)
        for path in DEFAULT_CONFIG_PATHS {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                builder = builder.add_source(File::new(&expanded, FileFormat::Toml));
                break;
            }
        }
    }

    // 3. Add environment variables with GITSHELF_ prefix
    // e.g., GITSHELF_LISTING__ACTIVITY_DURATION_MAXIMUM
    // Double underscore (__) maps to nested keys (listing.activity_duration_maximum)
    builder = builder.add_source(
        Environment::with_prefix("GITSHELF")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // Build and deserialize
    let config = builder
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Validate configuration values
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.listing.project_menu_limit == 0 {
        return Err(ConfigError::Invalid {
            message: "listing.project_menu_limit must be greater than 0".to_string(),
        });
    }

    match config.logging.level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        other => {
            return Err(ConfigError::Invalid {
                message: format!(
                    "logging.level must be one of trace, debug, info, warn, error; got: {}",
                    other
                ),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_from_str_basic() {
        let toml = r#"
[listing]
activity_duration_maximum = 14
project_menu_limit = 10
"#;

        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.listing.activity_duration_maximum, 14);
        assert_eq!(config.listing.project_menu_limit, 10);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.listing.activity_duration_maximum, 30);
        assert_eq!(config.listing.project_menu_limit, 15);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_clamp_can_be_disabled() {
        let toml = r#"
[listing]
activity_duration_maximum = 0
"#;

        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.listing.activity_duration_maximum, 0);
    }

    #[test]
    fn test_zero_menu_limit_rejected() {
        let toml = r#"
[listing]
project_menu_limit = 0
"#;

        let result = load_config_from_str(toml);
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_bogus_log_level_rejected() {
        let toml = r#"
[logging]
level = "loud"
"#;

        let result = load_config_from_str(toml);
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let result = load_config(Some("/nonexistent/gitshelf.toml"));
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }
}
