use thiserror::Error;

use crate::codec::DecodeError;

/// Errors raised while converting between catalogs and a table.
///
/// Conversion stops at the first error; no row or catalog is skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Nothing to convert: no languages, or no header line.
    #[error("Nothing to convert: {0}")]
    EmptyInput(String),

    /// A language identifier is empty or appears more than once.
    #[error("Invalid language identifier '{language}': {reason}")]
    InvalidLanguageId {
        /// offending identifier
        language: String,
        /// why it was rejected
        reason: String,
    },

    /// The header does not start with the `key` and `description` columns.
    #[error(
        "Invalid CSV header: expected the first columns to be \"key\",\"description\" but found {}",
        format_cells(.found)
    )]
    InvalidHeader {
        /// header cells as read
        found: Vec<String>,
    },

    /// A data row's cell count differs from the header's.
    #[error("Line {line}: expected {expected} cells but found {found}")]
    RowColumnMismatch {
        /// 1-based physical line
        line: usize,
        /// `2 + n` for `n` languages
        expected: usize,
        /// cells actually decoded
        found: usize,
    },

    /// A line's quoting cannot be resolved into fields.
    #[error("Line {line}: malformed row: {source}")]
    MalformedRow {
        /// 1-based physical line
        line: usize,
        /// codec failure
        #[source]
        source: DecodeError,
    },
}

impl ConvertError {
    /// Error for an empty identifier.
    pub(crate) fn empty_language(language: impl Into<String>) -> Self {
        Self::InvalidLanguageId {
            language: language.into(),
            reason: "the identifier is empty".to_string(),
        }
    }

    /// Error for an identifier seen twice.
    pub(crate) fn duplicate_language(language: impl Into<String>) -> Self {
        Self::InvalidLanguageId {
            language: language.into(),
            reason: "the identifier appears more than once".to_string(),
        }
    }
}

/// Renders header cells the way they appear in the file.
fn format_cells(cells: &[String]) -> String {
    if cells.is_empty() {
        return "nothing".to_string();
    }
    cells.iter().map(|cell| format!("\"{cell}\"")).collect::<Vec<_>>().join(",")
}
