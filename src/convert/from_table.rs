//! CSV text → catalogs.

use super::ConvertError;
use super::table::{
    DESCRIPTION_COLUMN,
    KEY_COLUMN,
    LEADING_COLUMNS,
};
use crate::catalog::{
    Catalog,
    CatalogSet,
    TranslationEntry,
};
use crate::codec::{
    decode_row,
    split_lines,
};

/// Parses CSV text into one catalog per language column.
///
/// The header must start with `key` and `description`; the remaining header
/// cells name the languages, in order. Every data row yields an entry in
/// every language, even when its message cell is empty. Blank lines are
/// skipped and a later row with the same key replaces the earlier one.
///
/// # Errors
/// - [`ConvertError::EmptyInput`] when there is no header or no language column
/// - [`ConvertError::InvalidHeader`] when the leading header cells are wrong
/// - [`ConvertError::InvalidLanguageId`] for an empty or repeated language column
/// - [`ConvertError::MalformedRow`] when a line's quoting cannot be resolved
/// - [`ConvertError::RowColumnMismatch`] when a row's cell count differs from the header's
pub fn table_to_catalog_set(text: &str) -> Result<CatalogSet, ConvertError> {
    let mut lines = split_lines(text).enumerate().map(|(index, line)| (index + 1, line));

    let Some((header_line, header)) = lines.next() else {
        return Err(ConvertError::EmptyInput("the CSV text has no header row".to_string()));
    };
    let header = decode_row(header)
        .map_err(|source| ConvertError::MalformedRow { line: header_line, source })?;
    let languages = parse_header(header)?;
    let width = LEADING_COLUMNS + languages.len();

    let mut catalogs = CatalogSet::from_pairs(
        languages.iter().map(|language| (language.as_str(), Catalog::new())),
    )?;

    let mut rows = 0_usize;
    for (line, raw) in lines {
        if raw.is_empty() {
            continue;
        }
        let cells =
            decode_row(raw).map_err(|source| ConvertError::MalformedRow { line, source })?;
        let mismatch =
            ConvertError::RowColumnMismatch { line, expected: width, found: cells.len() };
        let [key, description, messages @ ..] = cells.as_slice() else {
            return Err(mismatch);
        };
        if messages.len() != languages.len() {
            return Err(mismatch);
        }

        for (language, message) in languages.iter().zip(messages) {
            if let Some(catalog) = catalogs.get_mut(language) {
                let entry = TranslationEntry::new(description.as_str(), message.as_str());
                catalog.insert(key.clone(), entry);
            }
        }
        rows += 1;
    }

    tracing::debug!(languages = languages.len(), rows, "Parsed CSV table");
    Ok(catalogs)
}

/// Validates the header row and returns its language columns.
fn parse_header(header: Vec<String>) -> Result<Vec<String>, ConvertError> {
    let leading_columns_match = matches!(
        header.as_slice(),
        [key, description, ..] if key == KEY_COLUMN && description == DESCRIPTION_COLUMN
    );
    if !leading_columns_match {
        return Err(ConvertError::InvalidHeader { found: header });
    }

    let languages: Vec<String> = header.into_iter().skip(LEADING_COLUMNS).collect();
    if languages.is_empty() {
        return Err(ConvertError::EmptyInput("the CSV header has no language columns".to_string()));
    }
    Ok(languages)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::codec::DecodeError;

    const HEADER: &str = "\"key\",\"description\",\"en\",\"fr\",\"ja\"\r\n";

    #[googletest::test]
    fn test_rows_fill_every_language() {
        let text = format!("{HEADER}\"greeting\",\"Shown on home\",\"Hi\",\"Salut\",\"\"\r\n");

        let set = table_to_catalog_set(&text).unwrap();

        let languages: Vec<&str> = set.languages().collect();
        assert_eq!(languages, ["en", "fr", "ja"]);
        expect_that!(
            set.get("en").and_then(|c| c.get("greeting")),
            some(eq(&TranslationEntry::new("Shown on home", "Hi")))
        );
        expect_that!(
            set.get("fr").and_then(|c| c.get("greeting")),
            some(eq(&TranslationEntry::new("Shown on home", "Salut")))
        );
        expect_that!(
            set.get("ja").and_then(|c| c.get("greeting")),
            some(eq(&TranslationEntry::new("Shown on home", "")))
        );
    }

    #[googletest::test]
    fn test_quoted_values_are_unescaped() {
        let text = format!(
            "{HEADER}\"quote\",\"\",\"He said \"\"hi\"\" twice: \"\"hi\"\"\",\"a, b\",\"\"\r\n"
        );

        let set = table_to_catalog_set(&text).unwrap();

        let en = set.get("en").unwrap();
        expect_that!(en["quote"].default_message, eq("He said \"hi\" twice: \"hi\""));
        expect_that!(set.get("fr").unwrap()["quote"].default_message, eq("a, b"));
    }

    #[rstest]
    #[case::header_only(HEADER)]
    #[case::header_without_terminator("\"key\",\"description\",\"en\",\"fr\",\"ja\"")]
    #[case::trailing_blank_lines("\"key\",\"description\",\"en\",\"fr\",\"ja\"\r\n\r\n\r\n")]
    fn test_header_only_yields_empty_catalogs(#[case] text: &str) {
        let set = table_to_catalog_set(text).unwrap();

        assert_eq!(set.len(), 3);
        assert!(set.iter().all(|(_, catalog)| catalog.is_empty()));
    }

    #[rstest]
    fn test_blank_lines_between_rows_are_skipped() {
        let text = format!("{HEADER}\r\n\"a\",\"\",\"1\",\"2\",\"3\"\r\n\r\n\"b\",\"\",\"4\",\"5\",\"6\"\r\n");

        let set = table_to_catalog_set(&text).unwrap();

        let keys: Vec<&str> = set.get("ja").unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[rstest]
    fn test_lf_line_endings_are_accepted() {
        let text = "\"key\",\"description\",\"en\"\n\"a\",\"\",\"A\"\n";

        let set = table_to_catalog_set(text).unwrap();

        assert_eq!(set.get("en").unwrap()["a"].default_message, "A");
    }

    #[rstest]
    fn test_duplicate_key_keeps_last_row() {
        let text = "\"key\",\"description\",\"en\"\r\n\"a\",\"\",\"first\"\r\n\"a\",\"d\",\"second\"\r\n";

        let set = table_to_catalog_set(text).unwrap();

        let en = set.get("en").unwrap();
        assert_eq!(en.len(), 1);
        assert_eq!(en["a"], TranslationEntry::new("d", "second"));
    }

    #[rstest]
    #[case::wrong_key("\"id\",\"desc\",\"en\"\r\n")]
    #[case::wrong_case("\"Key\",\"description\",\"en\"\r\n")]
    #[case::swapped("\"description\",\"key\",\"en\"\r\n")]
    #[case::single_column("\"key\"\r\n")]
    fn test_invalid_header(#[case] text: &str) {
        let result = table_to_catalog_set(text);

        assert!(matches!(result, Err(ConvertError::InvalidHeader { .. })));
    }

    #[rstest]
    #[case::no_text("")]
    #[case::no_languages("\"key\",\"description\"\r\n")]
    fn test_empty_input(#[case] text: &str) {
        let result = table_to_catalog_set(text);

        assert!(matches!(result, Err(ConvertError::EmptyInput(_))));
    }

    #[rstest]
    #[case::duplicate("\"key\",\"description\",\"en\",\"en\"\r\n")]
    #[case::empty("\"key\",\"description\",\"en\",\"\"\r\n")]
    fn test_invalid_language_column(#[case] text: &str) {
        let result = table_to_catalog_set(text);

        assert!(matches!(result, Err(ConvertError::InvalidLanguageId { .. })));
    }

    #[rstest]
    #[case::too_many(format!("{HEADER}\"a\",\"\",\"1\",\"2\",\"3\",\"4\"\r\n"), 6)]
    #[case::too_few(format!("{HEADER}\"a\",\"\",\"1\",\"2\"\r\n"), 4)]
    fn test_row_column_mismatch(#[case] text: String, #[case] found: usize) {
        let result = table_to_catalog_set(&text);

        assert_eq!(
            result,
            Err(ConvertError::RowColumnMismatch { line: 2, expected: 5, found })
        );
    }

    #[rstest]
    fn test_row_mismatch_against_three_language_header() {
        let text = "\"key\",\"description\",\"en\",\"fr\",\"ja\"\r\n\"a\",\"\",\"1\",\"2\"\r\n";

        let result = table_to_catalog_set(text);

        assert!(matches!(result, Err(ConvertError::RowColumnMismatch { found: 4, .. })));
    }

    #[rstest]
    fn test_malformed_row_reports_line() {
        let text = format!("{HEADER}\"a\",\"\",\"1\",\"2\",\"3\"\r\n\"b\",\"\",\"open,\"2\",\"3\"\r\n");

        let result = table_to_catalog_set(&text);

        assert_eq!(
            result,
            Err(ConvertError::MalformedRow { line: 3, source: DecodeError::UnbalancedQuotes })
        );
    }
}
