//! CLI interface and argument parsing
//!
//! This module provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Exit code for a successful run
pub const EXIT_OK: i32 = 0;
/// Exit code for configuration problems
pub const EXIT_CONFIG: i32 = 2;
/// Exit code for input documents that cannot be converted
pub const EXIT_CONVERSION: i32 = 3;
/// Exit code for any other fatal error
pub const EXIT_FATAL: i32 = 5;

/// Convert Atena 26 Contact XML into CSV
#[derive(Parser, Debug)]
#[command(name = "atena-xml-conv")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (default is $HOME/.atena-xml-conv.toml)
    #[arg(short, long, env = "ATENA_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ATENA_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a contact XML export to CSV
    Convert(commands::convert::ConvertArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Write a configuration file with default settings
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cli_parse_convert() {
        let cli = Cli::parse_from(["atena-xml-conv", "convert", "contacts.xml"]);
        match cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.input, PathBuf::from("contacts.xml"));
                assert!(args.output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_convert_requires_input() {
        assert!(Cli::try_parse_from(["atena-xml-conv", "convert"]).is_err());
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from([
            "atena-xml-conv",
            "--config",
            "custom.toml",
            "convert",
            "in.xml",
        ]);
        assert_eq!(cli.config.as_deref(), Some("custom.toml"));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["atena-xml-conv", "--log-level", "debug", "convert", "in.xml"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_convert_options() {
        let cli = Cli::parse_from([
            "atena-xml-conv",
            "convert",
            "in.xml",
            "--output",
            "out.csv",
            "--family-slots",
            "3",
        ]);
        match cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.output, Some(PathBuf::from("out.csv")));
                assert_eq!(args.family_slots, Some(3));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["atena-xml-conv", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["atena-xml-conv", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
