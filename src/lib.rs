//! i18n-to-csv
//!
//! React Intl 形式の翻訳 JSON ファイル群と CSV ファイルの相互変換

pub mod catalog;
pub mod cli;
pub mod codec;
pub mod config;
pub mod convert;
pub mod workspace;

#[cfg(test)]
mod test_utils;

pub use catalog::{
    Catalog,
    CatalogSet,
    TranslationEntry,
};
pub use convert::{
    ConvertError,
    Table,
    catalog_set_to_table,
    table_to_catalog_set,
};
