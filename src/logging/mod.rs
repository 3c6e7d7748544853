//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Human-readable console logs on stderr (stdout carries the CSV)
//! - Configurable log levels
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use atena::logging::init_logging;
//! use atena::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, parse_log_level, LoggingGuard};

/// Log the start of a conversion
///
/// # Example
///
/// ```no_run
/// use atena::log_conversion_start;
///
/// log_conversion_start!("contacts.xml");
/// ```
#[macro_export]
macro_rules! log_conversion_start {
    ($input:expr) => {
        tracing::info!(input = %$input, "Starting conversion");
    };
}

/// Log the completion of a conversion
///
/// # Example
///
/// ```no_run
/// use atena::log_conversion_complete;
/// use std::time::Duration;
///
/// log_conversion_complete!(42, Duration::from_millis(15));
/// ```
#[macro_export]
macro_rules! log_conversion_complete {
    ($records:expr, $duration:expr) => {
        tracing::info!(
            records = $records,
            duration_ms = $duration.as_millis() as u64,
            "Conversion completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use atena::log_error_with_context;
/// use atena::domain::AtenaError;
///
/// let error = AtenaError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
