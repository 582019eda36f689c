//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use cnlex_core::Token;
use std::io::{self, Write};

/// Plain text formatter - one output line per input line, tokens joined by
/// a separator
pub struct TextFormatter<W: Write> {
    writer: W,
    separator: String,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, separator: impl Into<String>) -> Self {
        Self {
            writer,
            separator: separator.into(),
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout(separator: impl Into<String>) -> Self {
        Self::new(io::stdout(), separator)
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_line(&mut self, _source: &str, _line: usize, tokens: &[Token]) -> Result<()> {
        for (i, token) in tokens.iter().enumerate() {
            if i > 0 {
                self.writer.write_all(self.separator.as_bytes())?;
            }
            self.writer.write_all(token.text().as_bytes())?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
