//! Catalogs → table.

use indexmap::IndexMap;

use super::table::LEADING_COLUMNS;
use super::{
    ConvertError,
    Table,
};
use crate::catalog::{
    CatalogSet,
    check_language_id,
};

/// Merges every language's catalog into one table.
///
/// Columns follow the set's language order. Rows follow the order in which
/// keys are first seen, scanning languages in order and each catalog in its
/// own order. The description of a row comes from the first catalog that
/// holds the key; a language without the key gets an empty cell.
///
/// An empty cell does not record whether the key was missing or present with
/// an empty message, so reading the table back yields an empty entry in both
/// cases.
///
/// # Errors
/// - [`ConvertError::EmptyInput`] when the set has no languages
/// - [`ConvertError::InvalidLanguageId`] when a language identifier is empty
pub fn catalog_set_to_table(catalogs: &CatalogSet) -> Result<Table, ConvertError> {
    if catalogs.is_empty() {
        return Err(ConvertError::EmptyInput("no languages were supplied".to_string()));
    }
    for language in catalogs.languages() {
        check_language_id(language)?;
    }

    // key -> description, in first-seen order
    let mut keys: IndexMap<&str, &str> = IndexMap::new();
    for (_, catalog) in catalogs.iter() {
        for (key, entry) in catalog {
            keys.entry(key.as_str()).or_insert(entry.description.as_str());
        }
    }

    tracing::debug!(languages = catalogs.len(), keys = keys.len(), "Building table");

    let mut table = Table::with_languages(catalogs.languages());
    for (key, description) in keys {
        let mut record = Vec::with_capacity(LEADING_COLUMNS + catalogs.len());
        record.push(key.to_string());
        record.push(description.to_string());
        record.extend(catalogs.iter().map(|(_, catalog)| {
            catalog.get(key).map(|entry| entry.default_message.clone()).unwrap_or_default()
        }));
        table.push_record(record);
    }

    Ok(table)
}
