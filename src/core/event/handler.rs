//! Callback contract between the XML event source and its consumer

use crate::domain::Result;

/// Receives the events of one document, in document order
///
/// Attributes arrive as a flat list alternating name and value:
/// `[name0, value0, name1, value1, ...]`. Returning an error from any callback
/// stops the parse and the error is reported by
/// [`XmlEventSource::parse`](super::XmlEventSource::parse).
pub trait ContentHandler {
    /// Called once before the first element
    fn start_document(&mut self) -> Result<()> {
        Ok(())
    }

    fn start_element(&mut self, name: &str, attributes: &[String]) -> Result<()>;

    /// Called with each run of character data between two tags, possibly whitespace only
    fn characters(&mut self, text: &str) -> Result<()>;

    fn end_element(&mut self, name: &str) -> Result<()>;

    /// Called once after the last event of a document that parsed cleanly
    fn end_document(&mut self) -> Result<()> {
        Ok(())
    }
}

/// A recorded event, mostly useful for inspecting what a source delivers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlEvent {
    StartDocument,
    StartElement {
        name: String,
        attributes: Vec<String>,
    },
    Characters(String),
    EndElement(String),
    EndDocument,
}

/// Handler that records every event it receives
#[derive(Debug, Default)]
pub struct EventRecorder {
    pub events: Vec<XmlEvent>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContentHandler for EventRecorder {
    fn start_document(&mut self) -> Result<()> {
        self.events.push(XmlEvent::StartDocument);
        Ok(())
    }

    fn start_element(&mut self, name: &str, attributes: &[String]) -> Result<()> {
        self.events.push(XmlEvent::StartElement {
            name: name.to_string(),
            attributes: attributes.to_vec(),
        });
        Ok(())
    }

    fn characters(&mut self, text: &str) -> Result<()> {
        self.events.push(XmlEvent::Characters(text.to_string()));
        Ok(())
    }

    fn end_element(&mut self, name: &str) -> Result<()> {
        self.events.push(XmlEvent::EndElement(name.to_string()));
        Ok(())
    }

    fn end_document(&mut self) -> Result<()> {
        self.events.push(XmlEvent::EndDocument);
        Ok(())
    }
}
