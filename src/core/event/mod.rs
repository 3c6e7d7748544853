//! XML event stream
//!
//! The event source tokenizes a document and pushes start-element,
//! character-data and end-element events into a [`ContentHandler`].

pub mod handler;
pub mod source;

pub use handler::{ContentHandler, EventRecorder, XmlEvent};
pub use source::XmlEventSource;
