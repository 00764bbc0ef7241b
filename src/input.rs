//! Reading column choices from a line-oriented text source.

use std::io::BufRead;

use crate::error::InputError;

/// Source of raw column selections, one per move.
pub trait MoveSource {
    /// Next column, already translated to a zero-based index. Range checking
    /// is left to the engine.
    fn next_column(&mut self) -> Result<i64, InputError>;
}

/// Reads one integer per line from any buffered reader.
pub struct LineMoveSource<R> {
    reader: R,
    one_based: bool,
    line: String,
}

impl<R: BufRead> LineMoveSource<R> {
    pub fn new(reader: R, one_based: bool) -> Self {
        LineMoveSource {
            reader,
            one_based,
            line: String::new(),
        }
    }
}

impl<R: BufRead> MoveSource for LineMoveSource<R> {
    fn next_column(&mut self) -> Result<i64, InputError> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Err(InputError::Exhausted);
            }
            let text = self.line.trim();
            if text.is_empty() {
                continue;
            }
            return parse_column(text, self.one_based);
        }
    }
}

/// Parse a user-entered column number into a zero-based index.
pub fn parse_column(text: &str, one_based: bool) -> Result<i64, InputError> {
    let raw: i64 = text
        .trim()
        .parse()
        .map_err(|_| InputError::NotANumber(text.trim().to_string()))?;
    Ok(if one_based { raw.saturating_sub(1) } else { raw })
}
