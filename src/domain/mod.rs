//! Domain models and types.
//!
//! This module contains the data model of a conversion: the fixed output
//! column schema, the per-record buffer, and the error hierarchy.
//!
//! # Overview
//!
//! - **Column schema** ([`ColumnSchema`]): ordered, immutable column list
//! - **Record buffer** ([`RecordBuffer`]): values captured for one contact
//! - **Error types** ([`AtenaError`]) and the [`Result`] alias
//!
//! # Example
//!
//! ```rust
//! use atena::domain::{ColumnSchema, RecordBuffer};
//!
//! let schema = ColumnSchema::contact();
//! let mut record = RecordBuffer::new();
//! record.set("LastName", "田中");
//! record.set("furigana-LastName", "タナカ");
//!
//! let row = record.take_row(&schema);
//! assert_eq!(row.len(), schema.len());
//! assert_eq!(row[0], "田中");
//! ```

pub mod errors;
pub mod record;
pub mod result;
pub mod schema;

// Re-export commonly used types for convenience
pub use errors::AtenaError;
pub use record::RecordBuffer;
pub use result::Result;
pub use schema::ColumnSchema;
