//! Translation catalog data model.
mod types;

pub use types::{
    Catalog,
    CatalogSet,
    TranslationEntry,
};
pub(crate) use types::check_language_id;
