//! Mixed-script word segmentation for CJK text
//!
//! Text is segmented in two strictly forward stages:
//!
//! 1. [`CharacterClassifier`] partitions the input into maximal runs of
//!    ASCII letters, numbers and punctuation, and single-codepoint tokens
//!    for everything else (CJK ideographs in particular).
//! 2. [`SequenceSegmenter`] hands the CJK codepoints to a statistical
//!    [`SequenceTagger`] and rebuilds words by cutting after every position
//!    tagged with one of the configured ending tags.
//!
//! # Example
//!
//! ```rust
//! use cnlex_core::{Attribute, LexConfig, Lexizer, SequenceTagger};
//!
//! /// Tags every position as a single-character word.
//! #[derive(Default)]
//! struct Unigram {
//!     lines: Vec<String>,
//! }
//!
//! impl SequenceTagger for Unigram {
//!     fn clear(&mut self) { self.lines.clear() }
//!     fn add(&mut self, line: &str) { self.lines.push(line.to_string()) }
//!     fn parse(&mut self) -> bool { true }
//!     fn size(&self) -> usize { self.lines.len() }
//!     fn tag(&self, i: usize) -> Option<&str> { (i < self.lines.len()).then_some("S") }
//!     fn column(&self, i: usize, col: usize) -> Option<&str> {
//!         self.lines.get(i)?.split(' ').nth(col)
//!     }
//! }
//!
//! let config = LexConfig::default();
//! let mut lexizer = Lexizer::new(&config, Unigram::default());
//!
//! let tokens = lexizer.process("Rust很好").unwrap();
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text()).collect();
//! assert_eq!(texts, vec!["Rust", "很", "好"]);
//! assert_eq!(tokens[0].attribute(), Attribute::Alpha);
//! ```

pub mod charset;
pub mod classifier;
pub mod config;
#[cfg(feature = "crfsuite")]
pub mod crfsuite;
pub mod error;
pub mod lexizer;
pub mod segmenter;
pub mod tagger;
pub mod token;

pub use charset::{CharacterSets, CodepointSet};
pub use classifier::{CharacterClassifier, ClassState};
pub use config::LexConfig;
#[cfg(feature = "crfsuite")]
pub use crfsuite::{CrfSuiteModel, CrfSuiteTagger};
pub use error::{LexError, Result};
pub use lexizer::{Lexizer, LexizerFactory};
pub use segmenter::{atomize, encode_observation, SequenceSegmenter};
pub use tagger::{EndingTags, SequenceTagger, ATOMIC_TAG};
pub use token::{Attribute, Token};
