//! Element classification for the contact export format

use std::fmt;

/// Tag closing one contact record
pub const RECORD_TERMINATOR: &str = "ContactXMLItem";

/// Generic container whose real field identity lives in an attribute
pub const EXTENSION_ITEM: &str = "ExtensionItem";

/// Structural tags whose character data is never captured
const CONTAINER_TAGS: [&str; 9] = [
    "ContactXML",
    "ContactXMLItem",
    "PersonName",
    "PersonNameItem",
    "ImageItem",
    "Address",
    "AddressItem",
    "Extension",
    "Email",
];

/// Name elements that carry a phonetic reading attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameField {
    LastName,
    FirstName,
}

impl NameField {
    /// Tag name, which is also the output column of the name text
    pub fn as_str(&self) -> &'static str {
        match self {
            NameField::LastName => "LastName",
            NameField::FirstName => "FirstName",
        }
    }

    /// Output column of the paired reading
    pub fn furigana_column(&self) -> &'static str {
        match self {
            NameField::LastName => "furigana-LastName",
            NameField::FirstName => "furigana-FirstName",
        }
    }
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the engine treats an element when it opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// `LastName` / `FirstName`
    Reading(NameField),
    /// `ExtensionItem`
    Extension,
    /// Structural wrapper; its character data is discarded
    Container,
    /// Any other tag; its text is captured under the tag name
    Plain,
}

/// Classifies a tag name
///
/// # Examples
///
/// ```
/// use atena::core::flatten::{classify, ElementKind, NameField};
///
/// assert_eq!(classify("LastName"), ElementKind::Reading(NameField::LastName));
/// assert_eq!(classify("ExtensionItem"), ElementKind::Extension);
/// assert_eq!(classify("AddressItem"), ElementKind::Container);
/// assert_eq!(classify("Memo"), ElementKind::Plain);
/// ```
pub fn classify(name: &str) -> ElementKind {
    match name {
        "LastName" => ElementKind::Reading(NameField::LastName),
        "FirstName" => ElementKind::Reading(NameField::FirstName),
        EXTENSION_ITEM => ElementKind::Extension,
        _ if CONTAINER_TAGS.contains(&name) => ElementKind::Container,
        _ => ElementKind::Plain,
    }
}

/// Whether closing `name` completes a contact record
pub fn is_record_terminator(name: &str) -> bool {
    name == RECORD_TERMINATOR
}
