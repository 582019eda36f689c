//! Sequence tagger interface
//!
//! The segmenter talks to the statistical model only through
//! [`SequenceTagger`], a minimal clear/add/parse/read contract. Any
//! linear-chain tagger that consumes one whitespace-separated observation
//! line per position can sit behind it.

use std::collections::BTreeSet;

/// Tag forced onto atomic (non-CJK) units: a single-unit word
pub const ATOMIC_TAG: &str = "S";

/// Stateful sequence-tagging engine.
///
/// One instance serves one sequential caller; every stateful method takes
/// `&mut self`.
pub trait SequenceTagger {
    /// Drop all observations and results of the previous batch
    fn clear(&mut self);

    /// Append one observation line (columns separated by a space)
    fn add(&mut self, line: &str);

    /// Tag the current batch. Returns `false` when the engine fails.
    fn parse(&mut self) -> bool;

    /// Number of observations in the current batch
    fn size(&self) -> usize;

    /// Tag assigned to position `i` by the last successful `parse`
    fn tag(&self, i: usize) -> Option<&str>;

    /// Column `col` of observation `i`
    fn column(&self, i: usize, col: usize) -> Option<&str>;
}

impl<T: SequenceTagger + ?Sized> SequenceTagger for Box<T> {
    fn clear(&mut self) {
        (**self).clear()
    }

    fn add(&mut self, line: &str) {
        (**self).add(line)
    }

    fn parse(&mut self) -> bool {
        (**self).parse()
    }

    fn size(&self) -> usize {
        (**self).size()
    }

    fn tag(&self, i: usize) -> Option<&str> {
        (**self).tag(i)
    }

    fn column(&self, i: usize, col: usize) -> Option<&str> {
        (**self).column(i, col)
    }
}

/// Tags that mark "a word ends after this character".
///
/// Always contains [`ATOMIC_TAG`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndingTags {
    tags: BTreeSet<String>,
}

impl EndingTags {
    /// Build the set, adding the atomic tag if absent
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tags: BTreeSet<String> = tags.into_iter().map(Into::into).collect();
        tags.insert(ATOMIC_TAG.to_string());
        Self { tags }
    }

    /// Whether `tag` closes a word
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Iterate in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Number of tags
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Never true: the atomic tag is always present
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl Default for EndingTags {
    fn default() -> Self {
        Self::new(["S", "E"])
    }
}
