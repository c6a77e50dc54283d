//! Reading and writing catalogs and CSV files.

use std::path::{
    Path,
    PathBuf,
};

use globset::Glob;
use ignore::WalkBuilder;

use super::WorkspaceError;
use crate::catalog::{
    Catalog,
    CatalogSet,
};
use crate::convert::{
    ConvertError,
    Table,
};

/// Lists catalog files directly inside `dir` whose name matches `pattern`.
///
/// Hidden files such as `.i18n-csv.json` are skipped. The result is sorted by
/// file name; this order becomes the column order.
///
/// # Errors
/// Returns [`WorkspaceError::InvalidPattern`] for an invalid glob.
pub fn find_catalog_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, WorkspaceError> {
    let matcher = Glob::new(pattern)
        .map_err(|source| WorkspaceError::InvalidPattern { pattern: pattern.to_string(), source })?
        .compile_matcher();

    let mut found_files = Vec::new();
    for result in
        WalkBuilder::new(dir).standard_filters(false).hidden(true).max_depth(Some(1)).build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(?err, "Failed to read directory entry");
                continue;
            }
        };

        // ファイルのみを対象
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let Some(file_name) = path.file_name() else {
            continue;
        };
        if matcher.is_match(file_name) {
            found_files.push(path.to_path_buf());
        }
    }

    found_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(found_files)
}

/// Language identifier of a catalog file: its name without extension.
///
/// # Examples
/// - `langs/en.json` → `en`
/// - `langs/pt-BR.json` → `pt-BR`
///
/// # Errors
/// Returns [`WorkspaceError::InvalidFileName`] when the stem is missing or not UTF-8.
pub fn language_id_from_path(path: &Path) -> Result<String, WorkspaceError> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .ok_or_else(|| WorkspaceError::InvalidFileName(path.to_path_buf()))
}

/// Loads every matching catalog in `dir`, one language per file.
///
/// # Errors
/// - no matching file ([`ConvertError::EmptyInput`])
/// - two files with the same language identifier
/// - a file that cannot be read or parsed
pub fn load_catalog_set(dir: &Path, pattern: &str) -> Result<CatalogSet, WorkspaceError> {
    tracing::debug!(dir = %dir.display(), pattern, "Loading catalogs");

    let files = find_catalog_files(dir, pattern)?;
    if files.is_empty() {
        return Err(ConvertError::EmptyInput(format!(
            "no files matching '{pattern}' in '{}'",
            dir.display()
        ))
        .into());
    }

    let mut catalogs = CatalogSet::new();
    for path in files {
        let language = language_id_from_path(&path)?;
        let content = std::fs::read_to_string(&path)
            .map_err(|source| WorkspaceError::Read { path: path.clone(), source })?;
        let catalog: Catalog = serde_json::from_str(&content)
            .map_err(|source| WorkspaceError::InvalidCatalog { path: path.clone(), source })?;

        tracing::debug!(language = %language, keys = catalog.len(), "Loaded catalog");
        catalogs.insert(language, catalog)?;
    }

    Ok(catalogs)
}

/// Reads the whole CSV file.
///
/// # Errors
/// Returns [`WorkspaceError::Read`] when the file cannot be read as UTF-8 text.
pub fn read_table_text(path: &Path) -> Result<String, WorkspaceError> {
    std::fs::read_to_string(path)
        .map_err(|source| WorkspaceError::Read { path: path.to_path_buf(), source })
}

/// Writes the table as CSV, creating missing parent directories.
///
/// # Errors
/// Returns [`WorkspaceError::Write`] when the file cannot be written.
pub fn write_table(path: &Path, table: &Table) -> Result<(), WorkspaceError> {
    let write_error = |source| WorkspaceError::Write { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(path, table.to_csv()).map_err(write_error)
}

/// Writes one `<language>.json` file per catalog into `dir`.
///
/// Files are pretty-printed with two-space indentation and a trailing newline.
///
/// # Errors
/// - a language that is not a plain file name
/// - a file that cannot be written
pub fn write_catalog_set(dir: &Path, catalogs: &CatalogSet) -> Result<Vec<PathBuf>, WorkspaceError> {
    std::fs::create_dir_all(dir)
        .map_err(|source| WorkspaceError::Write { path: dir.to_path_buf(), source })?;

    let mut written = Vec::with_capacity(catalogs.len());
    for (language, catalog) in catalogs.iter() {
        let path = catalog_path(dir, language)?;
        let mut json = serde_json::to_string_pretty(catalog).map_err(|source| {
            WorkspaceError::Serialize { language: language.to_string(), source }
        })?;
        json.push('\n');

        std::fs::write(&path, json)
            .map_err(|source| WorkspaceError::Write { path: path.clone(), source })?;
        tracing::debug!(path = %path.display(), keys = catalog.len(), "Wrote catalog");
        written.push(path);
    }

    Ok(written)
}

/// Output path of a language's catalog; the language must stay inside `dir`.
fn catalog_path(dir: &Path, language: &str) -> Result<PathBuf, WorkspaceError> {
    let is_plain_name = !language.contains(['/', '\\']) && language != "." && language != "..";
    if !is_plain_name {
        return Err(WorkspaceError::InvalidOutputName(language.to_string()));
    }
    Ok(dir.join(format!("{language}.json")))
}
