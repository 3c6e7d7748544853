//! The flattening state machine
//!
//! The engine consumes the event stream of a contact export and emits one row
//! per contact record. It keeps two pieces of parse state: which element is
//! open for character data, and the sub-field value taken from that element's
//! attributes. Both are replaced on every start tag.

use super::attributes::{reading_attribute_of, subtype_attribute_of};
use super::classify::{classify, is_record_terminator, ElementKind, NameField};
use super::dispatch::{ExtensionDispatch, ExtensionOutcome};
use crate::core::event::ContentHandler;
use crate::core::output::RowSink;
use crate::domain::{ColumnSchema, RecordBuffer, Result};

/// The element whose character data is currently being captured
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CurrentElement {
    /// No element open, or the last one just closed
    #[default]
    None,
    /// Inside a structural container; all character data is discarded
    Suppressed,
    Reading(NameField),
    Extension,
    Plain(String),
}

/// Transient state scoped to the most recently opened element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseContext {
    pub current: CurrentElement,
    /// Reading or extension sub-field identifier taken from the start tag
    pub subtype: String,
}

/// Counters kept while flattening
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlattenStats {
    /// Data rows emitted (header excluded)
    pub records: usize,
    /// Extension values dropped because their sub-field is unknown
    pub unknown_subtype_values: usize,
    /// Repeated-field values dropped because every slot was taken
    pub overflow_values: usize,
    /// Whether data after the last record terminator was thrown away
    pub partial_record_discarded: bool,
}

/// Flattens contact records into rows of a fixed schema
///
/// # Examples
///
/// ```
/// use atena::core::event::XmlEventSource;
/// use atena::core::flatten::FlatteningEngine;
/// use atena::core::output::MemorySink;
/// use atena::domain::ColumnSchema;
///
/// # fn example() -> atena::domain::Result<()> {
/// let xml = r#"<ContactXML><ContactXMLItem>
///   <LastName pronunciation="タナカ">田中</LastName>
/// </ContactXMLItem></ContactXML>"#;
///
/// let mut engine = FlatteningEngine::new(ColumnSchema::contact(), 9, MemorySink::new());
/// XmlEventSource::from_xml_str(xml).parse(&mut engine)?;
///
/// let (sink, stats) = engine.into_parts();
/// assert_eq!(stats.records, 1);
/// assert_eq!(sink.rows[1][0], "田中");
/// assert_eq!(sink.rows[1][2], "タナカ");
/// # Ok(())
/// # }
/// ```
pub struct FlatteningEngine<S: RowSink> {
    schema: ColumnSchema,
    dispatch: ExtensionDispatch,
    context: ParseContext,
    record: RecordBuffer,
    sink: S,
    stats: FlattenStats,
}

impl<S: RowSink> FlatteningEngine<S> {
    pub fn new(schema: ColumnSchema, family_slots: usize, sink: S) -> Self {
        let dispatch = ExtensionDispatch::new(&schema, family_slots);
        Self {
            schema,
            dispatch,
            context: ParseContext::default(),
            record: RecordBuffer::new(),
            sink,
            stats: FlattenStats::default(),
        }
    }

    pub fn schema(&self) -> &ColumnSchema {
        &self.schema
    }

    pub fn context(&self) -> &ParseContext {
        &self.context
    }

    /// Values captured for the record in progress
    pub fn record(&self) -> &RecordBuffer {
        &self.record
    }

    pub fn stats(&self) -> &FlattenStats {
        &self.stats
    }

    pub fn into_parts(self) -> (S, FlattenStats) {
        (self.sink, self.stats)
    }

    /// Writes the header row
    pub fn write_header(&mut self) -> Result<()> {
        let header = self.schema.header();
        self.sink.write_row(&header)
    }

    /// Opens an element and resets the parse context
    ///
    /// # Errors
    ///
    /// Returns [`AtenaError::MissingAttribute`](crate::domain::AtenaError::MissingAttribute)
    /// if a name or extension element lacks its positional attribute.
    pub fn on_start_element(&mut self, name: &str, attributes: &[String]) -> Result<()> {
        self.context.subtype.clear();
        self.context.current = match classify(name) {
            ElementKind::Reading(field) => {
                self.context.subtype = reading_attribute_of(name, attributes)?.to_string();
                CurrentElement::Reading(field)
            }
            ElementKind::Extension => {
                self.context.subtype = subtype_attribute_of(name, attributes)?.to_string();
                CurrentElement::Extension
            }
            ElementKind::Container => CurrentElement::Suppressed,
            ElementKind::Plain => CurrentElement::Plain(name.to_string()),
        };
        Ok(())
    }

    /// Captures character data for the open element
    pub fn on_characters(&mut self, text: &str) {
        let value = text.trim();
        match &self.context.current {
            CurrentElement::None | CurrentElement::Suppressed => {}
            CurrentElement::Extension => {
                match self
                    .dispatch
                    .apply(&self.context.subtype, value, &mut self.record)
                {
                    ExtensionOutcome::Written(_) => {}
                    ExtensionOutcome::Overflow => {
                        self.stats.overflow_values += 1;
                        tracing::debug!(
                            subtype = %self.context.subtype,
                            value,
                            "No free slot left for repeated field, value dropped"
                        );
                    }
                    ExtensionOutcome::Dropped => {
                        self.stats.unknown_subtype_values += 1;
                        tracing::debug!(
                            subtype = %self.context.subtype,
                            "Unknown extension field, value dropped"
                        );
                    }
                }
            }
            CurrentElement::Reading(field) => {
                // name and reading are always set together
                self.record.set(field.as_str(), value);
                self.record
                    .set(field.furigana_column(), self.context.subtype.as_str());
            }
            CurrentElement::Plain(name) => {
                if !value.is_empty() {
                    self.record.set(name.as_str(), value);
                }
            }
        }
    }

    /// Closes an element; the record terminator emits the buffered row
    pub fn on_end_element(&mut self, name: &str) -> Result<()> {
        self.context.current = CurrentElement::None;
        if is_record_terminator(name) {
            self.emit_record()?;
        }
        Ok(())
    }

    fn emit_record(&mut self) -> Result<()> {
        let row = self.record.take_row(&self.schema);
        self.sink.write_row(&row)?;
        self.stats.records += 1;
        tracing::trace!(record = self.stats.records, "Record emitted");
        Ok(())
    }

    /// Discards anything captured after the last record terminator
    pub fn finish(&mut self) {
        if !self.record.is_empty() {
            tracing::warn!(
                fields = self.record.len(),
                "Input ended inside an unterminated record, partial record discarded"
            );
            self.record.clear();
            self.stats.partial_record_discarded = true;
        }
        self.context = ParseContext::default();
    }
}

impl<S: RowSink> ContentHandler for FlatteningEngine<S> {
    fn start_document(&mut self) -> Result<()> {
        self.write_header()
    }

    fn start_element(&mut self, name: &str, attributes: &[String]) -> Result<()> {
        self.on_start_element(name, attributes)
    }

    fn characters(&mut self, text: &str) -> Result<()> {
        self.on_characters(text);
        Ok(())
    }

    fn end_element(&mut self, name: &str) -> Result<()> {
        self.on_end_element(name)
    }

    fn end_document(&mut self) -> Result<()> {
        self.finish();
        Ok(())
    }
}
