//! Streaming XML event source backed by quick-xml
//!
//! The source reads the document once, front to back, and pushes events into a
//! [`ContentHandler`]. Nothing beyond the current event and the pending text
//! run is buffered.

use super::handler::ContentHandler;
use crate::domain::{AtenaError, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Pushes the events of one XML document into a handler
///
/// Adjacent text, CDATA sections and entity references are delivered as one
/// `characters` call. Empty elements (`<Tag/>`) are delivered as a start
/// event followed by an end event.
///
/// # Examples
///
/// ```
/// use atena::core::event::{EventRecorder, XmlEvent, XmlEventSource};
///
/// # fn example() -> atena::domain::Result<()> {
/// let mut recorder = EventRecorder::new();
/// XmlEventSource::from_xml_str(r#"<a x="1">hi</a>"#).parse(&mut recorder)?;
///
/// assert_eq!(
///     recorder.events[1],
///     XmlEvent::StartElement {
///         name: "a".to_string(),
///         attributes: vec!["x".to_string(), "1".to_string()],
///     }
/// );
/// # Ok(())
/// # }
/// ```
pub struct XmlEventSource<R: BufRead> {
    reader: Reader<R>,
}

impl XmlEventSource<BufReader<File>> {
    /// Opens a document on disk
    ///
    /// # Errors
    ///
    /// Returns [`AtenaError::Io`] if the file cannot be opened
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            AtenaError::Io(format!("Failed to open input file {}: {}", path.display(), e))
        })?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<'a> XmlEventSource<&'a [u8]> {
    /// Reads a document held in memory
    pub fn from_xml_str(xml: &'a str) -> Self {
        Self::from_reader(xml.as_bytes())
    }
}

impl<R: BufRead> XmlEventSource<R> {
    pub fn from_reader(reader: R) -> Self {
        let mut reader = Reader::from_reader(reader);
        // whitespace-only text must reach the handler untouched
        reader.config_mut().trim_text(false);
        reader.config_mut().check_end_names = true;
        Self { reader }
    }

    /// Parses the whole document, invoking the handler synchronously
    ///
    /// # Errors
    ///
    /// Returns [`AtenaError::Xml`] if the document is not well-formed,
    /// [`AtenaError::Io`] if reading fails, or whatever error the handler
    /// returns. Events already delivered are not rolled back.
    pub fn parse<H: ContentHandler + ?Sized>(mut self, handler: &mut H) -> Result<()> {
        let mut buf = Vec::new();
        let mut text = String::new();
        let mut depth: usize = 0;
        let mut saw_root = false;

        handler.start_document()?;

        loop {
            let event = self
                .reader
                .read_event_into(&mut buf)
                .map_err(|e| self.xml_error(e))?;

            match event {
                Event::Start(e) => {
                    Self::flush_text(&mut text, handler)?;
                    let (name, attributes) = self.read_start(&e)?;
                    depth += 1;
                    saw_root = true;
                    handler.start_element(&name, &attributes)?;
                }
                Event::Empty(e) => {
                    Self::flush_text(&mut text, handler)?;
                    let (name, attributes) = self.read_start(&e)?;
                    saw_root = true;
                    handler.start_element(&name, &attributes)?;
                    handler.end_element(&name)?;
                }
                Event::End(e) => {
                    Self::flush_text(&mut text, handler)?;
                    let name = self.decode(e.name().as_ref())?;
                    depth = depth.saturating_sub(1);
                    handler.end_element(&name)?;
                }
                Event::Text(e) => {
                    let raw = self.decode(&e)?;
                    let unescaped =
                        quick_xml::escape::unescape(&raw).map_err(|err| self.xml_error(err))?;
                    text.push_str(&unescaped);
                }
                Event::CData(e) => {
                    let raw = self.decode(&e)?;
                    text.push_str(&raw);
                }
                Event::GeneralRef(e) => {
                    let name = self.decode(&e)?;
                    let resolved = self.resolve_reference(&name)?;
                    text.push_str(&resolved);
                }
                Event::Eof => {
                    Self::flush_text(&mut text, handler)?;
                    break;
                }
                // declarations, comments, processing instructions and doctypes carry no data
                _ => {}
            }
            buf.clear();
        }

        if !saw_root {
            return Err(self.xml_error("document has no root element"));
        }
        if depth > 0 {
            return Err(self.xml_error(format!(
                "unexpected end of document with {depth} unclosed element(s)"
            )));
        }

        tracing::debug!(
            bytes = self.reader.buffer_position() as u64,
            "XML document parsed"
        );

        handler.end_document()
    }

    fn flush_text<H: ContentHandler + ?Sized>(text: &mut String, handler: &mut H) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        let pending = std::mem::take(text);
        handler.characters(&pending)
    }

    /// Tag name plus the flat name/value attribute list
    fn read_start(&self, e: &BytesStart<'_>) -> Result<(String, Vec<String>)> {
        let name = self.decode(e.name().as_ref())?;
        let mut attributes = Vec::new();
        for attr in e.attributes() {
            let attr = attr.map_err(|err| self.xml_error(err))?;
            attributes.push(self.decode(attr.key.as_ref())?);
            let value = attr
                .decode_and_unescape_value(self.reader.decoder())
                .map_err(|err| self.xml_error(err))?;
            attributes.push(value.into_owned());
        }
        Ok((name, attributes))
    }

    fn decode(&self, bytes: &[u8]) -> Result<String> {
        self.reader
            .decoder()
            .decode(bytes)
            .map(|s| s.into_owned())
            .map_err(|err| self.xml_error(err))
    }

    /// Resolves a predefined entity or character reference by name
    fn resolve_reference(&self, name: &str) -> Result<String> {
        let reference = format!("&{name};");
        quick_xml::escape::unescape(&reference)
            .map(|s| s.into_owned())
            .map_err(|err| self.xml_error(err))
    }

    fn xml_error(&self, err: impl Display) -> AtenaError {
        AtenaError::Xml {
            position: self.reader.buffer_position() as u64,
            message: err.to_string(),
        }
    }
}
