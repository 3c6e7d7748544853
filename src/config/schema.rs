//! Configuration schema types
//!
//! This module defines the configuration structure that maps to the TOML file.

use crate::core::flatten::DEFAULT_FAMILY_SLOTS;
use serde::{Deserialize, Serialize};

/// Main configuration
///
/// Every section is optional in the file; missing sections take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AtenaConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Conversion behaviour
    #[serde(default)]
    pub conversion: ConversionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AtenaConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.conversion.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Conversion configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Numbered slots available to the repeated family-member field
    #[serde(default = "default_family_slots")]
    pub family_slots: usize,

    /// Flush output after every record instead of at the end
    #[serde(default)]
    pub flush_each_record: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            family_slots: default_family_slots(),
            flush_each_record: false,
        }
    }
}

impl ConversionConfig {
    fn validate(&self) -> Result<(), String> {
        if self.family_slots == 0 {
            return Err("conversion.family_slots must be > 0".to_string());
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable JSON file logging in addition to stderr
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled = true".to_string());
        }

        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_family_slots() -> usize {
    DEFAULT_FAMILY_SLOTS
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AtenaConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.application.log_level, "info");
        assert_eq!(config.conversion.family_slots, 9);
        assert!(!config.conversion.flush_each_record);
        assert!(!config.logging.local_enabled);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AtenaConfig = toml::from_str("").unwrap();
        assert_eq!(config, AtenaConfig::default());
    }

    #[test]
    fn test_partial_section_uses_field_defaults() {
        let config: AtenaConfig = toml::from_str("[conversion]\nflush_each_record = true\n").unwrap();
        assert!(config.conversion.flush_each_record);
        assert_eq!(config.conversion.family_slots, DEFAULT_FAMILY_SLOTS);
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = AtenaConfig::default();
        config.application.log_level = "verbose".to_string();
        assert!(config.validate().unwrap_err().contains("log_level"));
    }

    #[test]
    fn test_zero_family_slots_rejected() {
        let mut config = AtenaConfig::default();
        config.conversion.family_slots = 0;
        assert!(config.validate().unwrap_err().contains("family_slots"));
    }

    #[test]
    fn test_invalid_rotation() {
        let mut config = AtenaConfig::default();
        config.logging.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_log_path_rejected_when_enabled() {
        let mut config = AtenaConfig::default();
        config.logging.local_enabled = true;
        config.logging.local_path = String::new();
        assert!(config.validate().is_err());
    }
}
