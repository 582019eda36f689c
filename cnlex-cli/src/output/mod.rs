//! Output formatting module

use anyhow::Result;
use cnlex_core::Token;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the tokens of one input line
    fn format_line(&mut self, source: &str, line: usize, tokens: &[Token]) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
