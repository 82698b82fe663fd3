//! Configuration Loader
//!
//! Loads and validates the optional TOML configuration file and applies
//! environment overrides.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Environment variable that enables verbose mode without a flag
pub const VERBOSE_ENV: &str = "QUANTUM_TRADER_VERBOSE";

/// Log levels accepted in `[logging].level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration file structure. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub app: AppSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Application configuration section
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppSection {
    /// Forwarded into the application as `verbose`
    #[serde(default)]
    pub verbose: bool,
}

/// Logging configuration section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    /// Log level when no verbosity flag is given: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl FileConfig {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// Unrecognized values leave the setting untouched.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(verbose) = lookup(VERBOSE_ENV).as_deref().and_then(parse_switch) {
            self.app.verbose = verbose;
        }
        self
    }
}

/// Parse a boolean switch the way shells usually spell it
fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let file = write_config(
            r#"
[app]
verbose = true

[logging]
level = "info"
"#,
        );

        let config = load_config(file.path()).unwrap();

        assert!(config.app.verbose);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let file = write_config("");

        let config = load_config(file.path()).unwrap();

        assert_eq!(config, FileConfig::default());
        assert!(!config.app.verbose);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("/nonexistent/path/quantum-trader.toml");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ConfigError::IoError(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let file = write_config("[app\nverbose = true");

        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_)));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let file = write_config(
            r#"
[app]
verbose = true
leverage = 10
"#,
        );

        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_)));
    }

    #[test]
    fn test_invalid_log_level() {
        let file = write_config(
            r#"
[logging]
level = "loud"
"#,
        );

        let result = load_config(file.path());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::ValidationError(_)
        ));
    }

    #[test]
    fn test_log_level_case_insensitive() {
        let file = write_config(
            r#"
[logging]
level = "DEBUG"
"#,
        );

        assert!(load_config(file.path()).is_ok());
    }

    #[test]
    fn test_env_override_enables_verbose() {
        let config = FileConfig::default().with_overrides_from(|key| {
            (key == VERBOSE_ENV).then(|| "yes".to_string())
        });

        assert!(config.app.verbose);
    }

    #[test]
    fn test_env_override_disables_verbose() {
        let mut config = FileConfig::default();
        config.app.verbose = true;

        let config = config.with_overrides_from(|_| Some("0".to_string()));

        assert!(!config.app.verbose);
    }

    #[test]
    fn test_env_override_ignores_garbage() {
        let mut config = FileConfig::default();
        config.app.verbose = true;

        let config = config.with_overrides_from(|_| Some("maybe".to_string()));

        assert!(config.app.verbose);
    }

    #[test]
    fn test_env_override_absent() {
        let config = FileConfig::default().with_overrides_from(|_| None);
        assert_eq!(config, FileConfig::default());
    }
}
