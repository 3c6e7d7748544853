//! Contact record flattening
//!
//! This module turns the nested element stream of a contact export into flat
//! rows. Element handling falls into three groups:
//!
//! - **Name elements** (`LastName`, `FirstName`) write their text and the
//!   reading from their first attribute as a pair of columns
//! - **Extension items** name their field in their second attribute; the
//!   value is routed through an [`ExtensionDispatch`] table, and the repeated
//!   family-member field fans out into numbered columns
//! - **Containers** suppress character data; every other element writes its
//!   non-blank text under its own tag name

pub mod attributes;
pub mod classify;
pub mod dispatch;
pub mod engine;

pub use attributes::{reading_attribute_of, subtype_attribute_of};
pub use classify::{classify, ElementKind, NameField, RECORD_TERMINATOR};
pub use dispatch::{
    ExtensionAction, ExtensionDispatch, ExtensionOutcome, DEFAULT_FAMILY_SLOTS,
    REPEATED_FAMILY_SUBTYPE,
};
pub use engine::{CurrentElement, FlattenStats, FlatteningEngine, ParseContext};
