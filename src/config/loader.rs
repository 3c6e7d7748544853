//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::AtenaConfig;
use crate::domain::errors::AtenaError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the home directory when no path is given
pub const DEFAULT_CONFIG_FILE_NAME: &str = ".atena-xml-conv.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into AtenaConfig
/// 4. Applies environment variable overrides (ATENA_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, a referenced variable is
/// unset, the TOML is invalid, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use atena::config::loader::load_config;
///
/// let config = load_config("atena-xml-conv.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<AtenaConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(AtenaError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        AtenaError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: AtenaConfig = toml::from_str(&contents)
        .map_err(|e| AtenaError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    finalize(&mut config)?;

    tracing::debug!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

/// Loads the configuration used by the command line
///
/// An explicit `path` must exist. Without one, the file
/// `$HOME/.atena-xml-conv.toml` is used if present; otherwise defaults apply.
/// Environment overrides and validation run in every case.
///
/// # Errors
///
/// Returns an error if an explicit file is missing or any step of
/// [`load_config`] fails.
pub fn load_config_or_default(path: Option<&str>) -> Result<AtenaConfig> {
    if let Some(path) = path {
        return load_config(path);
    }

    if let Some(default_path) = default_config_path() {
        if default_path.is_file() {
            return load_config(default_path);
        }
    }

    let mut config = AtenaConfig::default();
    finalize(&mut config)?;
    Ok(config)
}

/// `$HOME/.atena-xml-conv.toml`, if the home directory is known
pub fn default_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(|home| PathBuf::from(home).join(DEFAULT_CONFIG_FILE_NAME))
}

fn finalize(config: &mut AtenaConfig) -> Result<()> {
    apply_env_overrides(config)?;
    config.validate().map_err(|e| {
        AtenaError::Configuration(format!("Configuration validation failed: {}", e))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| AtenaError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        // Skip comment lines - don't process env vars in comments
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|m| m == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(AtenaError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using ATENA_* prefix
///
/// Environment variables follow the pattern: ATENA_<SECTION>_<KEY>
/// For example: ATENA_APPLICATION_LOG_LEVEL, ATENA_CONVERSION_FAMILY_SLOTS
fn apply_env_overrides(config: &mut AtenaConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("ATENA_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Conversion overrides
    if let Ok(val) = std::env::var("ATENA_CONVERSION_FAMILY_SLOTS") {
        config.conversion.family_slots = val.parse().map_err(|_| {
            AtenaError::Configuration(format!(
                "ATENA_CONVERSION_FAMILY_SLOTS must be a positive integer, got '{val}'"
            ))
        })?;
    }
    if let Ok(val) = std::env::var("ATENA_CONVERSION_FLUSH_EACH_RECORD") {
        config.conversion.flush_each_record = val.parse().unwrap_or(false);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("ATENA_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("ATENA_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("ATENA_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
