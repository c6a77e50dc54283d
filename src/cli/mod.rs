//! Command line front end.
mod args;
mod prompt;
mod run;

pub use args::{
    Cli,
    Options,
};
pub use prompt::{
    Prompt,
    TerminalPrompt,
};
pub use run::{
    resolve_options,
    run,
};
