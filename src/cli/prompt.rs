//! Interactive questions for options missing from the command line.

use std::io::{
    self,
    BufRead,
    Write,
};

/// Asks the user for a value, offering a default.
pub trait Prompt {
    /// Returns the answer, or `default` when the answer is blank.
    ///
    /// # Errors
    /// Returns an error when the terminal cannot be read or written.
    fn ask(&mut self, question: &str, default: &str) -> io::Result<String>;
}

/// Prompts on stderr and reads answers from stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn ask(&mut self, question: &str, default: &str) -> io::Result<String> {
        let mut stderr = io::stderr().lock();
        write!(stderr, "? {question} ({default}) ")?;
        stderr.flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(answer_or_default(&answer, default))
    }
}

/// Trims the answer; a blank answer selects the default.
pub(super) fn answer_or_default(answer: &str, default: &str) -> String {
    let answer = answer.trim();
    if answer.is_empty() { default.to_string() } else { answer.to_string() }
}
