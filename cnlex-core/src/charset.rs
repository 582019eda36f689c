//! Immutable codepoint sets used for character classification

use std::fmt;

/// Sorted, deduplicated set of codepoints
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CodepointSet {
    chars: Vec<char>,
}

impl CodepointSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from every codepoint in `s`.
    ///
    /// Whitespace is ignored so configuration values may be spaced out
    /// for readability.
    pub fn from_chars(s: &str) -> Self {
        s.chars().filter(|c| !c.is_whitespace()).collect()
    }

    /// Membership test
    pub fn contains(&self, ch: char) -> bool {
        self.chars.binary_search(&ch).is_ok()
    }

    /// Number of codepoints
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Iterate in codepoint order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    /// Codepoints present in both sets
    pub fn intersection(&self, other: &CodepointSet) -> Vec<char> {
        self.iter().filter(|&c| other.contains(c)).collect()
    }
}

impl FromIterator<char> for CodepointSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut chars: Vec<char> = iter.into_iter().collect();
        chars.sort_unstable();
        chars.dedup();
        Self { chars }
    }
}

impl fmt::Debug for CodepointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.chars.iter().collect();
        f.debug_tuple("CodepointSet").field(&s).finish()
    }
}

/// The configured character classes, built once and shared read-only
#[derive(Debug, Clone, Default)]
pub struct CharacterSets {
    /// CJK digit glyphs
    pub chinese_numerals: CodepointSet,
    /// Unit glyphs that extend a numeral run only after a numeral
    pub chinese_numeral_continuation: CodepointSet,
    /// Punctuation in addition to ASCII punctuation
    pub chinese_punctuation: CodepointSet,
}

impl CharacterSets {
    /// Create character sets from their string forms
    pub fn new(numerals: &str, numeral_continuation: &str, punctuation: &str) -> Self {
        Self {
            chinese_numerals: CodepointSet::from_chars(numerals),
            chinese_numeral_continuation: CodepointSet::from_chars(numeral_continuation),
            chinese_punctuation: CodepointSet::from_chars(punctuation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_chars_sorts_and_dedups() {
        let set = CodepointSet::from_chars("三一二一");
        assert_eq!(set.len(), 3);
        assert!(set.contains('一'));
        assert!(set.contains('三'));
        assert!(!set.contains('四'));
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let set = CodepointSet::from_chars("， 。\n！");
        assert_eq!(set.len(), 3);
        assert!(!set.contains(' '));
    }

    #[test]
    fn test_empty_set() {
        let set = CodepointSet::from_chars("");
        assert!(set.is_empty());
        assert!(!set.contains('a'));
    }

    #[test]
    fn test_intersection() {
        let a = CodepointSet::from_chars("一二三");
        let b = CodepointSet::from_chars("三四");
        assert_eq!(a.intersection(&b), vec!['三']);
    }

    #[test]
    fn test_debug_shows_members() {
        let set = CodepointSet::from_chars("十百");
        assert_eq!(format!("{:?}", set), "CodepointSet(\"十百\")");
    }
}
