//! Output column schema
//!
//! The column schema fixes both the header row and the order in which each
//! record's values are emitted.

use std::fmt;

/// Prefix of the column that pairs a name with its phonetic reading
pub const FURIGANA_PREFIX: &str = "furigana-";

/// Columns of the Atena contact export, in output order
const CONTACT_COLUMNS: [&str; 18] = [
    "LastName",
    "FirstName",
    "furigana-LastName",
    "furigana-FirstName",
    "AddressCode",
    "FullAddress",
    "Suffix",
    "PhoneItem",
    "EmailItem",
    "Memo",
    "NamesOfFamily1",
    "X-Suffix1",
    "NamesOfFamily2",
    "X-Suffix2",
    "NamesOfFamily3",
    "X-Suffix3",
    "atxBaseYear",
    "X-NYCardHistory",
];

/// Immutable ordered list of output column names
///
/// # Examples
///
/// ```
/// use atena::domain::ColumnSchema;
///
/// let schema = ColumnSchema::contact();
/// assert_eq!(schema.len(), 18);
/// assert_eq!(schema.columns()[0], "LastName");
/// assert!(schema.contains("furigana-FirstName"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    columns: Vec<String>,
}

impl ColumnSchema {
    /// The 18-column schema of the Atena 26 contact export
    pub fn contact() -> Self {
        Self {
            columns: CONTACT_COLUMNS.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Creates a schema from an explicit column list
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty or contains a duplicate or blank name
    pub fn new<I, S>(columns: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if columns.is_empty() {
            return Err("Column schema cannot be empty".to_string());
        }
        for (i, column) in columns.iter().enumerate() {
            if column.trim().is_empty() {
                return Err(format!("Column {i} has an empty name"));
            }
            if columns[..i].contains(column) {
                return Err(format!("Duplicate column name: {column}"));
            }
        }
        Ok(Self { columns })
    }

    /// Column names in output order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always false for a constructed schema
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Whether `name` is an output column
    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// The header row
    pub fn header(&self) -> Vec<String> {
        self.columns.clone()
    }
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self::contact()
    }
}

impl fmt::Display for ColumnSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.columns.join(","))
    }
}

/// Name of the reading column paired with a name element
///
/// ```
/// use atena::domain::schema::furigana_column;
///
/// assert_eq!(furigana_column("LastName"), "furigana-LastName");
/// ```
pub fn furigana_column(element: &str) -> String {
    format!("{FURIGANA_PREFIX}{element}")
}
