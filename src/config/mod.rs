//! Configuration management.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! The converter reads an optional TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `ATENA_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! The file is taken from `--config` (or `ATENA_CONFIG`); without one,
//! `$HOME/.atena-xml-conv.toml` is used when it exists.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use atena::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("atena-xml-conv.toml")?;
//! println!("Family slots: {}", config.conversion.family_slots);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [conversion]
//! family_slots = 9
//! flush_each_record = false
//!
//! [logging]
//! local_enabled = true
//! local_path = "${HOME}/.atena-xml-conv/logs"
//! local_rotation = "daily"
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`ConversionConfig`] - Repeated-field capacity and output flushing
//! - [`LoggingConfig`] - Optional JSON file logging

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{default_config_path, load_config, load_config_or_default};
pub use schema::{ApplicationConfig, AtenaConfig, ConversionConfig, LoggingConfig};
