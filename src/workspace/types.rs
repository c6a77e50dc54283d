//! Workspace type definitions.

use std::fmt;
use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

use crate::convert::ConvertError;

#[derive(Error, Debug)]
pub enum WorkspaceError {
    /// The source path does not exist.
    #[error("Source '{}' does not exist", .0.display())]
    SourceNotFound(PathBuf),

    /// A file could not be read.
    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        /// file being read
        path: PathBuf,
        /// underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A file or directory could not be written.
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        /// file or directory being written
        path: PathBuf,
        /// underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A JSON file is not a `{ key: { description, defaultMessage } }` object.
    #[error("'{}' is not a valid translation catalog: {source}", path.display())]
    InvalidCatalog {
        /// catalog file
        path: PathBuf,
        /// JSON parse failure
        #[source]
        source: serde_json::Error,
    },

    /// A catalog could not be rendered as JSON.
    #[error("Failed to serialize catalog for '{language}': {source}")]
    Serialize {
        /// language of the catalog
        language: String,
        /// serializer failure
        #[source]
        source: serde_json::Error,
    },

    /// A catalog file name has no usable stem.
    #[error("Cannot derive a language identifier from '{}'", .0.display())]
    InvalidFileName(PathBuf),

    /// The language cannot be used as a file name inside the target directory.
    #[error("Language '{0}' cannot be used as a catalog file name")]
    InvalidOutputName(String),

    /// The catalog file glob does not compile.
    #[error("Invalid catalog file pattern '{pattern}': {source}")]
    InvalidPattern {
        /// glob as configured
        pattern: String,
        /// glob compile failure
        #[source]
        source: globset::Error,
    },

    /// The conversion itself failed.
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Which way a run converts, decided by the kind of source path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// A directory of JSON catalogs becomes one CSV file.
    ToCsv,
    /// A CSV file becomes a directory of JSON catalogs.
    ToJson,
}

impl Direction {
    /// # Errors
    /// Returns [`WorkspaceError::SourceNotFound`] when `src` does not exist.
    pub fn detect(src: &Path) -> Result<Self, WorkspaceError> {
        let metadata =
            std::fs::metadata(src).map_err(|_| WorkspaceError::SourceNotFound(src.to_path_buf()))?;
        if metadata.is_dir() { Ok(Self::ToCsv) } else { Ok(Self::ToJson) }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToCsv => f.write_str("JSON -> CSV"),
            Self::ToJson => f.write_str("CSV -> JSON"),
        }
    }
}

/// Summary of a finished conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Which way the run converted.
    pub direction: Direction,
    /// Languages in column order.
    pub languages: Vec<String>,
    /// Number of translation keys.
    pub keys: usize,
    /// Files that were written.
    pub outputs: Vec<PathBuf>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    fn test_detect_direction() {
        let temp_dir = TempDir::new().unwrap();
        let csv = temp_dir.path().join("langs.csv");
        std::fs::write(&csv, "").unwrap();

        assert_eq!(Direction::detect(temp_dir.path()).unwrap(), Direction::ToCsv);
        assert_eq!(Direction::detect(&csv).unwrap(), Direction::ToJson);
    }

    #[rstest]
    fn test_detect_missing_source() {
        let temp_dir = TempDir::new().unwrap();

        let result = Direction::detect(&temp_dir.path().join("missing"));

        assert!(matches!(result, Err(WorkspaceError::SourceNotFound(_))));
    }
}
