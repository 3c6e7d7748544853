// AtenaXMLConv - Atena 26 Contact XML to CSV converter
// Copyright (c) 2025 AtenaXMLConv Contributors
// Licensed under the Apache License 2.0

//! # AtenaXMLConv - Atena 26 Contact XML to CSV
//!
//! Converts the Contact XML address-book export of the Atena 26 greeting-card
//! application into a flat CSV table, one row per contact.
//!
//! ## Overview
//!
//! The document is read as a stream of SAX-style events. Each event updates a
//! small parse context (the element currently open and the subtype of an
//! extension item) and a per-record buffer of column values. When a
//! `ContactXMLItem` closes, the buffer is projected onto a fixed column
//! schema and written out as one CSV row.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Event source, flattening engine, CSV output and coordinator
//! - [`domain`] - Column schema, record buffer and error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use atena::config::ConversionConfig;
//! use atena::core::convert::ConversionCoordinator;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let coordinator = ConversionCoordinator::new(ConversionConfig::default());
//!     let summary = coordinator.convert_file(Path::new("contacts.xml"), std::io::stdout())?;
//!
//!     eprintln!("Converted {} contacts", summary.records_written);
//!     Ok(())
//! }
//! ```
//!
//! ## Converting in memory
//!
//! ```rust
//! use atena::config::ConversionConfig;
//! use atena::core::convert::convert_str;
//!
//! let xml = r#"<ContactXML><ContactXMLItem>
//!   <PersonName><PersonNameItem>
//!     <LastName pronunciation="タナカ">田中</LastName>
//!   </PersonNameItem></PersonName>
//! </ContactXMLItem></ContactXML>"#;
//!
//! let csv = convert_str(xml, &ConversionConfig::default()).unwrap();
//! let row = csv.lines().nth(1).unwrap();
//! assert!(row.starts_with("田中,,タナカ,"));
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::AtenaError`]:
//!
//! ```rust,no_run
//! use atena::domain::AtenaError;
//!
//! fn example() -> Result<(), AtenaError> {
//!     let config = atena::config::load_config("atena-xml-conv.toml")?;
//!     println!("family slots: {}", config.conversion.family_slots);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
