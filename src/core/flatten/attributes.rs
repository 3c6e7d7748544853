//! Positional attribute accessors
//!
//! The export format identifies the reading and the extension sub-field by the
//! position of the attribute, not by its name. Attribute lists are flat
//! `[name0, value0, name1, value1, ...]`, so index 1 is the value of the first
//! attribute and index 3 the value of the second.

use crate::domain::{AtenaError, Result};

/// Position of the phonetic reading on `LastName` / `FirstName`
pub const READING_ATTRIBUTE_INDEX: usize = 1;

/// Position of the sub-field identifier on `ExtensionItem`
pub const SUBTYPE_ATTRIBUTE_INDEX: usize = 3;

/// Phonetic reading carried by a name element
///
/// # Errors
///
/// Returns [`AtenaError::MissingAttribute`] if the list is too short.
///
/// ```
/// use atena::core::flatten::reading_attribute_of;
///
/// let attrs = vec!["pronunciation".to_string(), "タナカ".to_string()];
/// assert_eq!(reading_attribute_of("LastName", &attrs).unwrap(), "タナカ");
/// ```
pub fn reading_attribute_of<'a>(element: &str, attributes: &'a [String]) -> Result<&'a str> {
    attribute_at(element, attributes, READING_ATTRIBUTE_INDEX)
}

/// Sub-field identifier carried by an extension item
///
/// # Errors
///
/// Returns [`AtenaError::MissingAttribute`] if the list is too short.
pub fn subtype_attribute_of<'a>(element: &str, attributes: &'a [String]) -> Result<&'a str> {
    attribute_at(element, attributes, SUBTYPE_ATTRIBUTE_INDEX)
}

fn attribute_at<'a>(element: &str, attributes: &'a [String], index: usize) -> Result<&'a str> {
    attributes
        .get(index)
        .map(String::as_str)
        .ok_or_else(|| AtenaError::MissingAttribute {
            element: element.to_string(),
            index,
            found: attributes.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_reading_is_first_attribute_value() {
        let list = attrs(&["pronunciation", "ハナコ", "other", "x"]);
        assert_eq!(reading_attribute_of("FirstName", &list).unwrap(), "ハナコ");
    }

    #[test]
    fn test_subtype_is_second_attribute_value() {
        let list = attrs(&["extendType", "0", "extendName", "NamesOfFamily"]);
        assert_eq!(
            subtype_attribute_of("ExtensionItem", &list).unwrap(),
            "NamesOfFamily"
        );
    }

    #[test]
    fn test_reading_missing() {
        let err = reading_attribute_of("LastName", &[]).unwrap_err();
        match err {
            AtenaError::MissingAttribute {
                element,
                index,
                found,
            } => {
                assert_eq!(element, "LastName");
                assert_eq!(index, 1);
                assert_eq!(found, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_subtype_missing_with_single_attribute() {
        let list = attrs(&["extendType", "0"]);
        let err = subtype_attribute_of("ExtensionItem", &list).unwrap_err();
        assert!(matches!(
            err,
            AtenaError::MissingAttribute {
                index: 3,
                found: 2,
                ..
            }
        ));
    }
}
