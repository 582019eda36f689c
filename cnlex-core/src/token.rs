//! Typed tokens passed between pipeline stages

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse class attached to every emitted token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Unclassified codepoint; a candidate CJK character for the segmenter
    Unknown,
    /// ASCII letters
    Alpha,
    /// Digits, decimal points and CJK numerals
    Number,
    /// ASCII or configured CJK punctuation
    Punctuation,
    /// CJK word (one or more ideographs)
    CjkChar,
}

impl Attribute {
    /// Atomic attributes are never split or merged by the segmenter
    pub fn is_atomic(self) -> bool {
        matches!(
            self,
            Attribute::Alpha | Attribute::Number | Attribute::Punctuation
        )
    }

    /// Class column written into tagger observation lines
    pub fn feature_label(self) -> &'static str {
        match self {
            Attribute::Alpha | Attribute::Number => "ASCII",
            Attribute::Punctuation => "PUNC",
            Attribute::Unknown | Attribute::CjkChar => "CN",
        }
    }

    /// Lowercase name, as used in JSON output
    pub fn as_str(self) -> &'static str {
        match self {
            Attribute::Unknown => "unknown",
            Attribute::Alpha => "alpha",
            Attribute::Number => "number",
            Attribute::Punctuation => "punctuation",
            Attribute::CjkChar => "cjk_char",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A run of text with its attribute. Each token owns its buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Token text, never empty once emitted by a stage
    pub text: String,
    /// Token class
    pub attribute: Attribute,
}

impl Token {
    /// Create a token
    pub fn new(text: impl Into<String>, attribute: Attribute) -> Self {
        Self {
            text: text.into(),
            attribute,
        }
    }

    /// Token text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Token attribute
    pub fn attribute(&self) -> Attribute {
        self.attribute
    }

    /// Length in codepoints
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
