//! Conversion orchestration
//!
//! One conversion is a single synchronous pass: the event source pushes the
//! document through the flattening engine, rows go to the CSV writer as each
//! record completes, and a [`ConversionSummary`] describes the result.

pub mod coordinator;
pub mod summary;

pub use coordinator::{convert_str, ConversionCoordinator};
pub use summary::ConversionSummary;
