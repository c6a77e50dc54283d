//! One conversion run, in whichever direction the source calls for.

use std::path::Path;

use super::{
    ConversionReport,
    Direction,
    WorkspaceError,
    load_catalog_set,
    read_table_text,
    write_catalog_set,
    write_table,
};
use crate::convert::{
    catalog_set_to_table,
    table_to_catalog_set,
};

/// Converts `src` into `target`.
///
/// A directory source is read as JSON catalogs and written as one CSV file;
/// a file source is read as CSV and written as one JSON catalog per language
/// into the `target` directory.
///
/// # Errors
/// Returns the first read, parse, conversion, or write failure; nothing is
/// written when reading or converting fails.
pub fn convert(
    src: &Path,
    target: &Path,
    file_pattern: &str,
) -> Result<ConversionReport, WorkspaceError> {
    let direction = Direction::detect(src)?;
    tracing::debug!(src = %src.display(), target = %target.display(), %direction, "Converting");

    let report = match direction {
        Direction::ToCsv => {
            let catalogs = load_catalog_set(src, file_pattern)?;
            let table = catalog_set_to_table(&catalogs)?;
            write_table(target, &table)?;
            ConversionReport {
                direction,
                languages: table.languages().to_vec(),
                keys: table.records().len(),
                outputs: vec![target.to_path_buf()],
            }
        }
        Direction::ToJson => {
            let text = read_table_text(src)?;
            let catalogs = table_to_catalog_set(&text)?;
            let outputs = write_catalog_set(target, &catalogs)?;
            ConversionReport {
                direction,
                languages: catalogs.languages().map(str::to_string).collect(),
                keys: catalogs.iter().next().map_or(0, |(_, catalog)| catalog.len()),
                outputs,
            }
        }
    };

    tracing::info!(
        direction = %report.direction,
        languages = report.languages.len(),
        keys = report.keys,
        "Conversion finished"
    );
    Ok(report)
}
