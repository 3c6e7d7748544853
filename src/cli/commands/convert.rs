//! Convert command implementation
//!
//! This module implements the `convert` command, which writes the CSV form of
//! a contact export to stdout or to a file.

use crate::cli::{EXIT_CONFIG, EXIT_CONVERSION, EXIT_FATAL, EXIT_OK};
use crate::config::load_config_or_default;
use crate::core::convert::ConversionCoordinator;
use crate::domain::AtenaError;
use crate::log_error_with_context;
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the convert command
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Contact XML file to convert
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Write CSV to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Override the number of numbered family-member columns filled per record
    #[arg(long, value_name = "N")]
    pub family_slots: Option<usize>,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input.display(), "Starting convert command");

        let mut config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                log_error_with_context!(&e, "Failed to load configuration");
                eprintln!("Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        if let Some(slots) = self.family_slots {
            tracing::info!(family_slots = slots, "Overriding family slots from CLI");
            config.conversion.family_slots = slots;
        }

        if let Err(e) = config.validate().map_err(AtenaError::Validation) {
            log_error_with_context!(&e, "Configuration validation failed");
            eprintln!("Error: {e}");
            return Ok(EXIT_CONFIG);
        }

        let output: Box<dyn Write> = match &self.output {
            Some(path) => match File::create(path) {
                Ok(file) => Box::new(BufWriter::new(file)),
                Err(e) => {
                    tracing::error!(output = %path.display(), error = %e, "Cannot create output file");
                    eprintln!("Error: cannot create {}: {e}", path.display());
                    return Ok(EXIT_FATAL);
                }
            },
            None => Box::new(io::stdout().lock()),
        };

        let coordinator = ConversionCoordinator::new(config.conversion);
        match coordinator.convert_file(&self.input, output) {
            Ok(summary) => {
                tracing::info!(
                    records = summary.records_written,
                    dropped_values = summary.dropped_values(),
                    duration_ms = summary.duration.as_millis() as u64,
                    "Convert command finished"
                );
                Ok(EXIT_OK)
            }
            Err(e) if e.is_input_error() => {
                log_error_with_context!(&e, "Input document could not be converted");
                eprintln!("Error: {e}");
                Ok(EXIT_CONVERSION)
            }
            Err(e) => {
                log_error_with_context!(&e, "Conversion failed");
                eprintln!("Error: {e}");
                Ok(EXIT_FATAL)
            }
        }
    }
}
