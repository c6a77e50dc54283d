//! Conversions between a [`CatalogSet`](crate::catalog::CatalogSet) and a [`Table`].
mod error;
mod from_table;
mod table;
mod to_table;

pub use error::ConvertError;
pub use from_table::table_to_catalog_set;
pub use table::{
    DESCRIPTION_COLUMN,
    KEY_COLUMN,
    Table,
};
pub use to_table::catalog_set_to_table;
