//! In-memory form of the CSV file.

use crate::codec::encode_row;

/// First header cell.
pub const KEY_COLUMN: &str = "key";
/// Second header cell.
pub const DESCRIPTION_COLUMN: &str = "description";

/// Number of columns preceding the language columns.
pub(crate) const LEADING_COLUMNS: usize = 2;

/// Rows of string cells; row 0 is the header
/// `["key", "description", lang_1, ..., lang_n]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Starts a table with the header for `languages`.
    pub(crate) fn with_languages<'a>(languages: impl IntoIterator<Item = &'a str>) -> Self {
        let header = [KEY_COLUMN, DESCRIPTION_COLUMN]
            .into_iter()
            .chain(languages)
            .map(str::to_string)
            .collect();
        Self { rows: vec![header] }
    }

    pub(crate) fn push_record(&mut self, record: Vec<String>) {
        debug_assert_eq!(record.len(), self.header().len());
        self.rows.push(record);
    }

    /// All rows, header first.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    #[must_use]
    pub fn header(&self) -> &[String] {
        self.rows.first().map(Vec::as_slice).unwrap_or_default()
    }

    /// Language columns in header order.
    #[must_use]
    pub fn languages(&self) -> &[String] {
        self.header().get(LEADING_COLUMNS..).unwrap_or(&[])
    }

    /// Data rows, one per translation key.
    #[must_use]
    pub fn records(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Serializes every row with [`encode_row`].
    #[must_use]
    pub fn to_csv(&self) -> String {
        self.rows.iter().map(|row| encode_row(row)).collect()
    }
}
