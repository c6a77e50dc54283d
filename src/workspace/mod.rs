//! File-system side of a conversion: locating, reading and writing catalogs and CSV files.
mod conversion;
mod files;
mod types;

pub use conversion::convert;
pub use files::{
    find_catalog_files,
    language_id_from_path,
    load_catalog_set,
    read_table_text,
    write_catalog_set,
    write_table,
};
pub use types::{
    ConversionReport,
    Direction,
    WorkspaceError,
};
