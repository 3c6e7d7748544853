//! Conversion coordinator
//!
//! Wires an [`XmlEventSource`] to a [`FlatteningEngine`] writing CSV, and
//! reports the outcome as a [`ConversionSummary`].

use super::summary::ConversionSummary;
use crate::config::ConversionConfig;
use crate::core::event::XmlEventSource;
use crate::core::flatten::FlatteningEngine;
use crate::core::output::{CsvRowWriter, RowSink};
use crate::domain::{AtenaError, ColumnSchema, Result};
use crate::{log_conversion_complete, log_conversion_start};
use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Instant;

/// Runs conversions with a fixed configuration
pub struct ConversionCoordinator {
    config: ConversionConfig,
    schema: ColumnSchema,
}

impl ConversionCoordinator {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            config,
            schema: ColumnSchema::contact(),
        }
    }

    /// Replaces the default contact schema
    pub fn with_schema(mut self, schema: ColumnSchema) -> Self {
        self.schema = schema;
        self
    }

    pub fn schema(&self) -> &ColumnSchema {
        &self.schema
    }

    /// Converts the document at `input`, writing CSV to `output`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsed, a record
    /// violates the positional attribute layout, or writing fails. Rows
    /// completed before the failure are flushed to `output`.
    pub fn convert_file<W: Write>(&self, input: &Path, output: W) -> Result<ConversionSummary> {
        log_conversion_start!(input.display());
        let source = XmlEventSource::from_path(input)?;
        self.convert(source, output)
    }

    /// Converts a document read from `source`
    pub fn convert<R: BufRead, W: Write>(
        &self,
        source: XmlEventSource<R>,
        output: W,
    ) -> Result<ConversionSummary> {
        let started = Instant::now();

        let sink = CsvRowWriter::new(output).with_flush_each_row(self.config.flush_each_record);
        let mut engine = FlatteningEngine::new(self.schema.clone(), self.config.family_slots, sink);

        let parsed = source.parse(&mut engine);
        let (mut sink, stats) = engine.into_parts();
        let flushed = sink.flush();

        if let Err(e) = parsed {
            tracing::error!(
                error = %e,
                records_written = stats.records,
                "Conversion aborted"
            );
            return Err(e);
        }
        flushed?;

        let summary = ConversionSummary::from_stats(&stats).with_duration(started.elapsed());
        log_conversion_complete!(summary.records_written, summary.duration);
        if !summary.is_lossless() {
            tracing::info!(
                unknown_subtype_values = summary.unknown_subtype_values,
                overflow_values = summary.overflow_values,
                partial_record_discarded = summary.partial_record_discarded,
                "Some input values were not written"
            );
        }
        Ok(summary)
    }
}

/// Converts an in-memory document to a CSV string
///
/// # Examples
///
/// ```
/// use atena::config::ConversionConfig;
/// use atena::core::convert::convert_str;
///
/// # fn example() -> atena::domain::Result<()> {
/// let csv = convert_str(
///     "<ContactXML><ContactXMLItem><Memo>hi</Memo></ContactXMLItem></ContactXML>",
///     &ConversionConfig::default(),
/// )?;
/// assert_eq!(csv.lines().count(), 2);
/// assert!(csv.lines().nth(1).unwrap().contains(",hi,"));
/// # Ok(())
/// # }
/// ```
pub fn convert_str(xml: &str, config: &ConversionConfig) -> Result<String> {
    let mut out = Vec::new();
    ConversionCoordinator::new(config.clone())
        .convert(XmlEventSource::from_xml_str(xml), &mut out)?;
    String::from_utf8(out).map_err(|e| AtenaError::Output(e.to_string()))
}
