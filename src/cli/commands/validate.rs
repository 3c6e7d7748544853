//! Validate config command implementation
//!
//! This module implements the `validate-config` command for checking the
//! configuration that a conversion would run with.

use crate::cli::{EXIT_CONFIG, EXIT_OK};
use crate::config::{default_config_path, load_config_or_default};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let shown_path = match config_path {
            Some(path) => path.to_string(),
            None => default_config_path()
                .map(|p| format!("{} (if present)", p.display()))
                .unwrap_or_else(|| "built-in defaults".to_string()),
        };
        tracing::info!(config_path = %shown_path, "Validating configuration");

        println!("🔍 Validating configuration: {shown_path}");
        println!();

        // load_config_or_default validates as part of loading
        match load_config_or_default(config_path) {
            Ok(config) => {
                println!("✅ Configuration is valid");
                println!();
                println!("Configuration Summary:");
                println!("  Log Level: {}", config.application.log_level);
                println!("  Family Slots: {}", config.conversion.family_slots);
                println!(
                    "  Flush Each Record: {}",
                    config.conversion.flush_each_record
                );
                println!("  File Logging: {}", config.logging.local_enabled);
                if config.logging.local_enabled {
                    println!("  Log Directory: {}", config.logging.local_path);
                    println!("  Log Rotation: {}", config.logging.local_rotation);
                }
                println!();
                Ok(EXIT_OK)
            }
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                println!();
                Ok(EXIT_CONFIG)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_valid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ok.toml");
        std::fs::write(&path, "[conversion]\nfamily_slots = 4\n").unwrap();
        let code = ValidateArgs {}.execute(path.to_str()).unwrap();
        assert_eq!(code, EXIT_OK);
    }

    #[test]
    fn test_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[logging]\nlocal_rotation = \"weekly\"\n").unwrap();
        let code = ValidateArgs {}.execute(path.to_str()).unwrap();
        assert_eq!(code, EXIT_CONFIG);
    }

    #[test]
    fn test_missing_explicit_file() {
        let code = ValidateArgs {}
            .execute(Some("no/such/config.toml"))
            .unwrap();
        assert_eq!(code, EXIT_CONFIG);
    }
}
