//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;

const LONG_ABOUT: &str = "\
Converts a folder of JSON files containing translations in React Intl format
to a CSV file you can use in the spreadsheet app of your choice, and vice versa.

A folder source is converted to CSV; a file source is converted to one JSON
file per language column. Defaults can be set in `.i18n-csv.json`.";

#[derive(Debug, Clone, Parser)]
#[command(name = "i18n-to-csv")]
#[command(about = "Convert React Intl JSON translations to CSV and back")]
#[command(long_about = LONG_ABOUT)]
#[command(version)]
pub struct Cli {
    /// Folder or file to be converted (`langs` by default)
    #[arg(short, long)]
    pub src: Option<PathBuf>,

    /// File or folder to save the conversion results (`langs.csv` by default)
    #[arg(short, long)]
    pub target: Option<PathBuf>,

    /// Do not ask questions and use default values if options are omitted
    #[arg(short = 'y', long, visible_alias = "yes")]
    pub silent: bool,
}

/// Fully resolved options for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Folder of JSON catalogs or CSV file to read.
    pub src: PathBuf,
    /// CSV file or folder to write.
    pub target: PathBuf,
    /// Glob selecting catalog files in a source folder.
    pub file_pattern: String,
}
