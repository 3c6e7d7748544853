//! Extension item dispatch
//!
//! An `ExtensionItem` names its logical field in an attribute. The dispatch
//! table maps each known sub-field identifier to the write it performs; any
//! identifier not in the table is dropped.

use crate::domain::{ColumnSchema, RecordBuffer};
use std::collections::HashMap;

/// Sub-field identifier of the repeated family-member field
pub const REPEATED_FAMILY_SUBTYPE: &str = "NamesOfFamily";

/// Number of numbered family-member slots (`NamesOfFamily1` .. `NamesOfFamily9`)
pub const DEFAULT_FAMILY_SLOTS: usize = 9;

static DROP: ExtensionAction = ExtensionAction::Drop;

/// What an extension item value does to the record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionAction {
    /// Store under a fixed column
    Column(String),
    /// Store under the first free column among `base1 ..= base{slots}`
    FanOut { base: String, slots: usize },
    /// Discard the value
    Drop,
}

/// Result of applying an extension item value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionOutcome {
    /// Stored under the named column
    Written(String),
    /// Every numbered slot was already taken
    Overflow,
    /// Sub-field identifier is not known
    Dropped,
}

/// Table from sub-field identifier to [`ExtensionAction`]
///
/// # Examples
///
/// ```
/// use atena::core::flatten::{ExtensionDispatch, ExtensionOutcome};
/// use atena::domain::{ColumnSchema, RecordBuffer};
///
/// let dispatch = ExtensionDispatch::new(&ColumnSchema::contact(), 9);
/// let mut record = RecordBuffer::new();
///
/// let outcome = dispatch.apply("NamesOfFamily", "太郎", &mut record);
/// assert_eq!(outcome, ExtensionOutcome::Written("NamesOfFamily1".to_string()));
/// assert_eq!(dispatch.apply("Unknown", "x", &mut record), ExtensionOutcome::Dropped);
/// ```
#[derive(Debug, Clone)]
pub struct ExtensionDispatch {
    actions: HashMap<String, ExtensionAction>,
}

impl ExtensionDispatch {
    /// Builds the table for a schema
    ///
    /// Every schema column is addressable directly by its own name; the
    /// repeated family-member identifier fans out over `family_slots` columns.
    pub fn new(schema: &ColumnSchema, family_slots: usize) -> Self {
        let mut actions: HashMap<String, ExtensionAction> = schema
            .columns()
            .iter()
            .map(|column| (column.clone(), ExtensionAction::Column(column.clone())))
            .collect();
        actions.insert(
            REPEATED_FAMILY_SUBTYPE.to_string(),
            ExtensionAction::FanOut {
                base: REPEATED_FAMILY_SUBTYPE.to_string(),
                slots: family_slots,
            },
        );
        Self { actions }
    }

    /// Action registered for `subtype`, or [`ExtensionAction::Drop`]
    pub fn action_for(&self, subtype: &str) -> &ExtensionAction {
        self.actions.get(subtype).unwrap_or(&DROP)
    }

    /// Writes `value` into the record according to the action for `subtype`
    pub fn apply(&self, subtype: &str, value: &str, record: &mut RecordBuffer) -> ExtensionOutcome {
        match self.action_for(subtype) {
            ExtensionAction::Column(column) => {
                record.set(column.as_str(), value);
                ExtensionOutcome::Written(column.clone())
            }
            ExtensionAction::FanOut { base, slots } => {
                for index in 1..=*slots {
                    let column = format!("{base}{index}");
                    if !record.contains(&column) {
                        record.set(column.as_str(), value);
                        return ExtensionOutcome::Written(column);
                    }
                }
                ExtensionOutcome::Overflow
            }
            ExtensionAction::Drop => ExtensionOutcome::Dropped,
        }
    }
}
