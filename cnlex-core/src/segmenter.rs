//! Tagger-driven word segmentation
//!
//! The segmenter expands the classifier's tokens into atomic units (whole
//! non-CJK tokens, single CJK codepoints), feeds one observation line per
//! unit to a [`SequenceTagger`], and rebuilds words by cutting after every
//! unit whose tag is an ending tag.

use crate::error::{LexError, Result};
use crate::tagger::{EndingTags, SequenceTagger, ATOMIC_TAG};
use crate::token::{Attribute, Token};
use std::sync::Arc;

/// Expand tokens into atomic units.
///
/// Atomic tokens are kept whole. Every other token is split into
/// codepoints; whitespace is dropped and each remaining codepoint becomes a
/// [`Attribute::CjkChar`] unit.
pub fn atomize(tokens: Vec<Token>) -> Vec<Token> {
    let mut units = Vec::with_capacity(tokens.len());

    for token in tokens {
        if token.attribute.is_atomic() {
            units.push(token);
            continue;
        }

        units.extend(
            token
                .text
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| Token::new(c.to_string(), Attribute::CjkChar)),
        );
    }

    units
}

/// Observation line for one unit: its text followed by its class label
pub fn encode_observation(unit: &Token) -> String {
    format!("{} {}", unit.text, unit.attribute.feature_label())
}

/// Sequence segmenter owning one tagger instance
pub struct SequenceSegmenter<T: SequenceTagger> {
    tagger: T,
    ending_tags: Arc<EndingTags>,
}

impl<T: SequenceTagger> SequenceSegmenter<T> {
    /// Create a segmenter
    pub fn new(tagger: T, ending_tags: Arc<EndingTags>) -> Self {
        Self {
            tagger,
            ending_tags,
        }
    }

    /// The ending tags in use
    pub fn ending_tags(&self) -> &EndingTags {
        &self.ending_tags
    }

    /// Borrow the tagger
    pub fn tagger(&self) -> &T {
        &self.tagger
    }

    /// Consume `tokens` and return the merged word sequence.
    ///
    /// # Errors
    ///
    /// - [`LexError::TaggingFailure`] when the tagger fails or returns a tag
    ///   count different from the number of units; no output is produced.
    /// - [`LexError::BoundaryInconsistency`] when the tags end inside an
    ///   unterminated CJK run; the error carries the best-effort output.
    pub fn segment(&mut self, tokens: Vec<Token>) -> Result<Vec<Token>> {
        let units = atomize(tokens);
        if units.is_empty() {
            return Ok(Vec::new());
        }

        let tags = self.tag_units(&units)?;
        self.reconstruct(units, tags)
    }

    /// Run the tagger over `units` and copy out one tag per unit
    fn tag_units(&mut self, units: &[Token]) -> Result<Vec<String>> {
        self.tagger.clear();
        for unit in units {
            self.tagger.add(&encode_observation(unit));
        }

        if !self.tagger.parse() {
            return Err(LexError::TaggingFailure("crf parse failed".into()));
        }

        let size = self.tagger.size();
        if size != units.len() {
            return Err(LexError::TaggingFailure(format!(
                "tagger returned {size} tags for {} observations",
                units.len()
            )));
        }

        (0..size)
            .map(|i| {
                self.tagger.tag(i).map(str::to_owned).ok_or_else(|| {
                    LexError::TaggingFailure(format!("no tag at position {i}"))
                })
            })
            .collect()
    }

    /// Cut the unit sequence after every ending tag
    fn reconstruct(&self, units: Vec<Token>, tags: Vec<String>) -> Result<Vec<Token>> {
        let unit_count = units.len();
        let mut out = Vec::with_capacity(unit_count);
        let mut pending = String::new();

        for (unit, tag) in units.into_iter().zip(tags) {
            if unit.attribute.is_atomic() {
                if !pending.is_empty() {
                    tracing::debug!(
                        pending = %pending,
                        next = %unit.text,
                        "closing CJK run before atomic unit"
                    );
                    out.push(Token::new(std::mem::take(&mut pending), Attribute::CjkChar));
                }
                // The forced tag is an ending tag, so the unit closes itself.
                debug_assert!(self.ending_tags.contains(ATOMIC_TAG));
                out.push(unit);
                continue;
            }

            pending.push_str(&unit.text);
            if self.ending_tags.contains(&tag) {
                out.push(Token::new(std::mem::take(&mut pending), Attribute::CjkChar));
            }
        }

        if !pending.is_empty() {
            tracing::warn!(
                pending = %pending,
                "tag sequence ended without a closing boundary"
            );
            out.push(Token::new(pending.clone(), Attribute::CjkChar));
            return Err(LexError::BoundaryInconsistency {
                pending,
                tokens: out,
            });
        }

        tracing::debug!(units = unit_count, words = out.len(), "segmented sequence");
        Ok(out)
    }
}
