//! Catalog types shared by both conversion directions.

use indexmap::IndexMap;
use serde::{
    Deserialize,
    Serialize,
};

use crate::convert::ConvertError;

/// A single message in one language (React Intl message descriptor shape).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationEntry {
    /// Context for translators; empty when absent.
    pub description: String,
    /// The message text (`defaultMessage`); empty when absent.
    pub default_message: String,
}

impl TranslationEntry {
    #[must_use]
    pub fn new(description: impl Into<String>, default_message: impl Into<String>) -> Self {
        Self { description: description.into(), default_message: default_message.into() }
    }
}

/// One language's translations, keyed by message id in document order.
pub type Catalog = IndexMap<String, TranslationEntry>;

/// All languages' catalogs, keyed by language identifier.
///
/// Insertion order is the column order of the generated table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSet {
    languages: IndexMap<String, Catalog>,
}

impl CatalogSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from `(language, catalog)` pairs, keeping their order.
    ///
    /// # Errors
    /// Returns [`ConvertError::InvalidLanguageId`] for an empty or repeated language.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, ConvertError>
    where
        I: IntoIterator<Item = (S, Catalog)>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for (language, catalog) in pairs {
            set.insert(language, catalog)?;
        }
        Ok(set)
    }

    /// Appends a language as the last column.
    ///
    /// # Errors
    /// Returns [`ConvertError::InvalidLanguageId`] for an empty or repeated language.
    pub fn insert(
        &mut self,
        language: impl Into<String>,
        catalog: Catalog,
    ) -> Result<(), ConvertError> {
        let language = language.into();
        check_language_id(&language)?;
        if self.languages.contains_key(&language) {
            return Err(ConvertError::duplicate_language(language));
        }
        self.languages.insert(language, catalog);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, language: &str) -> Option<&Catalog> {
        self.languages.get(language)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Catalog)> {
        self.languages.iter().map(|(language, catalog)| (language.as_str(), catalog))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Mutable access used while filling catalogs row by row.
    pub(crate) fn get_mut(&mut self, language: &str) -> Option<&mut Catalog> {
        self.languages.get_mut(language)
    }
}

impl From<IndexMap<String, Catalog>> for CatalogSet {
    fn from(languages: IndexMap<String, Catalog>) -> Self {
        Self { languages }
    }
}

/// Rejects language identifiers that cannot name a column or a file.
pub(crate) fn check_language_id(language: &str) -> Result<(), ConvertError> {
    if language.trim().is_empty() {
        return Err(ConvertError::empty_language(language));
    }
    Ok(())
}
