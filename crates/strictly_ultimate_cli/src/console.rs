//! Line-oriented console I/O with whitespace-separated tokens.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use tracing::trace;

/// Reads tokens from `R` and writes prompts and messages to `W`.
///
/// Input is consumed a line at a time; every whitespace-separated word on
/// the line is queued, so "2 3" on one line and "2" then "3" on two lines
/// read the same.
pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        let token = self.pending.pop_front();
        trace!(?token, "Token read");
        Ok(token)
    }

    /// Drops any tokens left over from the current line.
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }

    /// Writes a line of text.
    pub fn say(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", text.as_ref())
    }

    /// Writes text without a newline and flushes so it shows before input.
    pub fn prompt(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        write!(self.output, "{}", text.as_ref())?;
        self.output.flush()
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_tokens_span_lines() {
        let mut console = Console::new(Cursor::new("2 3\n\n  4\n"), Vec::new());
        assert_eq!(console.next_token().ok().flatten().as_deref(), Some("2"));
        assert_eq!(console.next_token().ok().flatten().as_deref(), Some("3"));
        assert_eq!(console.next_token().ok().flatten().as_deref(), Some("4"));
        assert_eq!(console.next_token().ok().flatten(), None);
    }

    #[test]
    fn test_discard_line() {
        let mut console = Console::new(Cursor::new("a b c\nd\n"), Vec::new());
        assert_eq!(console.next_token().ok().flatten().as_deref(), Some("a"));
        console.discard_line();
        assert_eq!(console.next_token().ok().flatten().as_deref(), Some("d"));
    }

    #[test]
    fn test_prompt_has_no_newline() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        console.prompt("> ").expect("write to vec");
        console.say("done").expect("write to vec");
        assert_eq!(console.into_output(), b"> done\n".to_vec());
    }
}
