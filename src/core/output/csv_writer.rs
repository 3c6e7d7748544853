//! CSV row writer
//!
//! Rows are written without quoting or escaping, and every line carries a
//! trailing comma before the newline (`a,b,c,\n`).

use super::RowSink;
use crate::domain::{AtenaError, Result};
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use std::io::Write;

/// Writes rows as unquoted, comma-terminated CSV lines
///
/// # Examples
///
/// ```
/// use atena::core::output::{CsvRowWriter, RowSink};
///
/// # fn example() -> atena::domain::Result<()> {
/// let mut writer = CsvRowWriter::new(Vec::new());
/// writer.write_row(&["a".to_string(), "b".to_string()])?;
/// let bytes = writer.into_inner()?;
/// assert_eq!(String::from_utf8(bytes).unwrap(), "a,b,\n");
/// # Ok(())
/// # }
/// ```
pub struct CsvRowWriter<W: Write> {
    writer: Writer<W>,
    flush_each_row: bool,
    rows_written: usize,
}

impl<W: Write> CsvRowWriter<W> {
    pub fn new(inner: W) -> Self {
        let writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(inner);
        Self {
            writer,
            flush_each_row: false,
            rows_written: 0,
        }
    }

    /// Flush after every row so completed records reach the destination immediately
    pub fn with_flush_each_row(mut self, flush_each_row: bool) -> Self {
        self.flush_each_row = flush_each_row;
        self
    }

    /// Rows written so far, header included
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flushes and returns the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| AtenaError::Output(e.to_string()))
    }
}

impl<W: Write> RowSink for CsvRowWriter<W> {
    fn write_row(&mut self, row: &[String]) -> Result<()> {
        // the empty trailing field produces the comma before the newline
        self.writer
            .write_record(row.iter().map(String::as_str).chain(std::iter::once("")))?;
        self.rows_written += 1;
        if self.flush_each_row {
            self.writer.flush()?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
