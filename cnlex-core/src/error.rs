//! Error types for segmentation

use crate::token::Token;
use thiserror::Error;

/// Errors raised while configuring or running the segmentation pipeline
#[derive(Debug, Error)]
pub enum LexError {
    /// Model or required character sets missing or unloadable
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The tagging engine could not produce tags for a batch
    #[error("Tagging failure: {0}")]
    TaggingFailure(String),

    /// The tag sequence ended inside an unterminated CJK run.
    ///
    /// `tokens` holds the best-effort output, with the pending run flushed
    /// as the final token.
    #[error("Boundary inconsistency: sequence ended inside unterminated run '{pending}'")]
    BoundaryInconsistency {
        /// Text of the run that was still open when tags ran out
        pending: String,
        /// Complete best-effort segmentation
        tokens: Vec<Token>,
    },

    /// Malformed UTF-8 in the input
    #[error("invalid UTF-8 on line {line} at byte {position}")]
    InvalidUtf8 {
        /// 1-based input line number
        line: usize,
        /// Byte offset of the first invalid sequence within the line
        position: usize,
    },
}

impl LexError {
    /// Whether best-effort output accompanies this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, LexError::BoundaryInconsistency { .. })
    }

    /// Take the best-effort tokens out of a recoverable error.
    ///
    /// Returns the error unchanged when it carries no output.
    pub fn into_tokens(self) -> std::result::Result<Vec<Token>, LexError> {
        match self {
            LexError::BoundaryInconsistency { tokens, .. } => Ok(tokens),
            other => Err(other),
        }
    }
}

/// Result type for segmentation operations
pub type Result<T> = std::result::Result<T, LexError>;
