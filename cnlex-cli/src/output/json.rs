//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use cnlex_core::Token;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs all lines as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    lines: Vec<LineData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct LineData {
    /// Input the line came from (`-` for stdin)
    pub source: String,
    /// 1-based line number within the source
    pub line: usize,
    /// Segmented tokens
    pub tokens: Vec<Token>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines: Vec::new(),
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_line(&mut self, source: &str, line: usize, tokens: &[Token]) -> Result<()> {
        self.lines.push(LineData {
            source: source.to_string(),
            line,
            tokens: tokens.to_vec(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.lines)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cnlex_core::Attribute;

    #[test]
    fn test_json_output_shape() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter
            .format_line(
                "input.txt",
                3,
                &[
                    Token::new("你好", Attribute::CjkChar),
                    Token::new("1", Attribute::Number),
                ],
            )
            .unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.into_inner()).unwrap();
        let parsed: Vec<LineData> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].source, "input.txt");
        assert_eq!(parsed[0].line, 3);
        assert_eq!(parsed[0].tokens[0], Token::new("你好", Attribute::CjkChar));
        assert!(output.contains("\"attribute\": \"number\""));
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.finish().unwrap();
        let output = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(output.trim(), "[]");
    }
}
