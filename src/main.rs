//! Entry point for the `i18n-to-csv` command.

use clap::Parser;
use i18n_to_csv::cli::{
    self,
    Cli,
    TerminalPrompt,
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Cli::parse();
    cli::run(&args, &mut TerminalPrompt)?;
    Ok(())
}
