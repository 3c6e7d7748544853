//! Init command implementation
//!
//! This module implements the `init` command for generating a configuration
//! file with the default settings.

use crate::cli::{EXIT_CONFIG, EXIT_FATAL, EXIT_OK};
use crate::config::default_config_path;
use crate::core::flatten::DEFAULT_FAMILY_SLOTS;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file (default is $HOME/.atena-xml-conv.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        let Some(output) = self.output.clone().or_else(default_config_path) else {
            println!("❌ Cannot determine home directory; pass --output");
            return Ok(EXIT_CONFIG);
        };

        tracing::info!(output = %output.display(), "Initializing configuration file");

        println!("📝 Initializing atena-xml-conv configuration");
        println!();

        if output.exists() && !self.force {
            println!("❌ Configuration file already exists: {}", output.display());
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG);
        }

        match fs::write(&output, Self::generate_config()) {
            Ok(()) => {
                println!("✅ Configuration file created: {}", output.display());
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", output.display());
                println!("  2. Validate configuration: atena-xml-conv validate-config");
                println!("  3. Convert: atena-xml-conv convert contacts.xml > contacts.csv");
                println!();
                Ok(EXIT_OK)
            }
            Err(e) => {
                tracing::error!(output = %output.display(), error = %e, "Failed to write configuration file");
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(EXIT_FATAL)
            }
        }
    }

    /// Default configuration in TOML form
    fn generate_config() -> String {
        format!(
            r#"# atena-xml-conv configuration
# Values may reference environment variables as ${{VAR}}.
# Any key can also be overridden with ATENA_<SECTION>_<KEY>.

[application]
log_level = "info"  # trace | debug | info | warn | error

[conversion]
# Number of NamesOfFamily<N>/X-Suffix<N> column pairs filled per record
family_slots = {DEFAULT_FAMILY_SLOTS}
# Flush the output after every record
flush_each_record = false

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"  # daily | hourly | never
"#
        )
    }
}
