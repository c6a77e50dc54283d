//! Row-level codec for the comma-separated, double-quoted CSV dialect.
//!
//! Every field written is wrapped in `"` and embedded quotes are doubled.
//! Line terminators inside a value are not escaped, so a value containing
//! one splits its row in two when read back.

use thiserror::Error;

/// Terminator appended after every record.
pub const LINE_TERMINATOR: &str = "\r\n";

const QUOTE: char = '"';
const SEPARATOR: char = ',';

/// Reasons a line cannot be read as a sequence of quoted fields.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The line ended inside a quoted field.
    #[error("unbalanced quotes: a quoted field is never closed")]
    UnbalancedQuotes,
    /// A quote appeared where the field is not a well-formed quoted value.
    #[error("stray quote in field {field}")]
    StrayQuote {
        /// 0-based field index
        field: usize,
    },
}

/// Encodes one record as a quoted CSV line, terminator included.
#[must_use]
pub fn encode_row<S: AsRef<str>>(cells: &[S]) -> String {
    let mut line = String::new();
    for (index, cell) in cells.iter().enumerate() {
        if index > 0 {
            line.push(SEPARATOR);
        }
        line.push(QUOTE);
        line.push_str(&cell.as_ref().replace(QUOTE, "\"\""));
        line.push(QUOTE);
    }
    line.push_str(LINE_TERMINATOR);
    line
}

/// Decodes one physical line into its fields.
///
/// A comma separates fields only while outside quotes. Quoted fields lose
/// their surrounding quotes and every `""` inside collapses to `"`. Fields
/// without any quote are taken verbatim. A trailing line terminator is
/// ignored.
///
/// # Errors
/// Returns a [`DecodeError`] when the quoting cannot be resolved.
pub fn decode_row(line: &str) -> Result<Vec<String>, DecodeError> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);

    let mut raw_fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for ch in line.chars() {
        match ch {
            QUOTE => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            SEPARATOR if !in_quotes => raw_fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    if in_quotes {
        return Err(DecodeError::UnbalancedQuotes);
    }
    raw_fields.push(current);

    raw_fields
        .iter()
        .enumerate()
        .map(|(field, raw)| unquote(raw).ok_or(DecodeError::StrayQuote { field }))
        .collect()
}

/// Strips the surrounding quotes of one raw field and unescapes `""`.
///
/// Returns `None` when the field is not a single well-formed quoted value.
fn unquote(raw: &str) -> Option<String> {
    if !raw.contains(QUOTE) {
        return Some(raw.to_string());
    }

    let inner = raw.strip_prefix(QUOTE)?.strip_suffix(QUOTE)?;

    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch == QUOTE {
            // inside a quoted value a quote only ever appears doubled
            if chars.next() != Some(QUOTE) {
                return None;
            }
        }
        value.push(ch);
    }
    Some(value)
}

/// Splits file text into physical lines.
///
/// Accepts CRLF as written by [`encode_row`] as well as bare LF, and drops a
/// leading byte order mark.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.strip_prefix('\u{feff}').unwrap_or(text).lines()
}
