//! Core conversion logic.
//!
//! # Modules
//!
//! - [`event`] - Streaming XML event source and the handler contract
//! - [`flatten`] - The flattening state machine and its element rules
//! - [`output`] - Row sinks, including the CSV writer
//! - [`convert`] - Orchestration of one conversion run
//!
//! # Conversion Workflow
//!
//! 1. **Open**: the event source opens the input document
//! 2. **Header**: the engine writes the column header when the document starts
//! 3. **Flatten**: each start/characters/end event updates the parse context
//!    and the record buffer
//! 4. **Emit**: every `ContactXMLItem` end tag writes one row and resets the buffer
//! 5. **Report**: the coordinator returns a [`convert::ConversionSummary`]
//!
//! # Example
//!
//! ```rust,no_run
//! use atena::config::ConversionConfig;
//! use atena::core::convert::ConversionCoordinator;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let coordinator = ConversionCoordinator::new(ConversionConfig::default());
//! let summary = coordinator.convert_file(Path::new("contacts.xml"), std::io::stdout())?;
//! eprintln!("Converted {} records", summary.records_written);
//! # Ok(())
//! # }
//! ```

pub mod convert;
pub mod event;
pub mod flatten;
pub mod output;
