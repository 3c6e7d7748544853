//! Row output
//!
//! The flattening engine hands every finished row, header included, to a
//! [`RowSink`]. [`CsvRowWriter`] is the sink used by the command line.

pub mod csv_writer;

pub use csv_writer::CsvRowWriter;

use crate::domain::Result;

/// Destination for flattened rows
pub trait RowSink {
    /// Writes one row; `row` always has one value per schema column
    fn write_row(&mut self, row: &[String]) -> Result<()>;

    /// Pushes buffered rows to the underlying destination
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: RowSink + ?Sized> RowSink for &mut T {
    fn write_row(&mut self, row: &[String]) -> Result<()> {
        (**self).write_row(row)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}

/// Sink that keeps rows in memory
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemorySink {
    pub rows: Vec<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RowSink for MemorySink {
    fn write_row(&mut self, row: &[String]) -> Result<()> {
        self.rows.push(row.to_vec());
        Ok(())
    }
}
