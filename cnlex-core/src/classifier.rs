//! Character-class tokenizer
//!
//! Partitions raw text into maximal runs of Latin letters, numbers and
//! punctuation. Every other codepoint (CJK ideographs in particular) is
//! emitted as its own single-codepoint token so that the sequence segmenter
//! can decide the real word boundaries. Whitespace separates runs but is
//! never emitted.

use crate::charset::CharacterSets;
use crate::token::{Attribute, Token};
use std::sync::Arc;

/// Classifier state: the class of the current codepoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassState {
    /// Unclassified (CJK ideographs, whitespace, other scripts)
    Unknown,
    /// ASCII letter
    Alpha,
    /// Digit, decimal point inside a number, or CJK numeral
    Number,
    /// ASCII or configured punctuation
    Punctuation,
    /// End of input sentinel
    End,
}

impl ClassState {
    /// Transition function.
    ///
    /// `ch` is the next codepoint (`None` at end of input) and `last` the
    /// class of the codepoint before it.
    pub fn next(ch: Option<char>, last: ClassState, sets: &CharacterSets) -> ClassState {
        let Some(ch) = ch else {
            return ClassState::End;
        };

        if ch.is_ascii_alphabetic() {
            ClassState::Alpha
        } else if ch.is_ascii_digit() {
            ClassState::Number
        } else if ch == '.' && last == ClassState::Number {
            ClassState::Number
        } else if sets.chinese_punctuation.contains(ch) || ch.is_ascii_punctuation() {
            ClassState::Punctuation
        } else if sets.chinese_numerals.contains(ch) {
            ClassState::Number
        } else if sets.chinese_numeral_continuation.contains(ch) && last == ClassState::Number {
            ClassState::Number
        } else {
            ClassState::Unknown
        }
    }

    /// Attribute given to a buffer closed while in this state
    pub fn attribute(self) -> Option<Attribute> {
        match self {
            ClassState::Alpha => Some(Attribute::Alpha),
            ClassState::Number => Some(Attribute::Number),
            ClassState::Punctuation => Some(Attribute::Punctuation),
            ClassState::Unknown => Some(Attribute::Unknown),
            ClassState::End => None,
        }
    }
}

/// Finite-state character classifier
#[derive(Debug, Clone)]
pub struct CharacterClassifier {
    sets: Arc<CharacterSets>,
}

impl CharacterClassifier {
    /// Create a classifier over shared character sets
    pub fn new(sets: Arc<CharacterSets>) -> Self {
        Self { sets }
    }

    /// The character sets in use
    pub fn sets(&self) -> &CharacterSets {
        &self.sets
    }

    /// Split `text` into typed tokens in a single pass
    pub fn classify(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut buffer = String::new();
        let mut last = ClassState::Unknown;
        let mut chars = text.chars();

        loop {
            let ch = chars.next();
            let state = ClassState::next(ch, last, &self.sets);

            // Unknown codepoints never merge, so they close the buffer too.
            if (state != last || state == ClassState::Unknown) && !buffer.is_empty() {
                if let Some(attribute) = last.attribute() {
                    tokens.push(Token::new(std::mem::take(&mut buffer), attribute));
                }
            }

            let Some(ch) = ch else {
                break;
            };

            if !(state == ClassState::Unknown && ch.is_whitespace()) {
                buffer.push(ch);
            }
            last = state;
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> CharacterClassifier {
        CharacterClassifier::new(Arc::new(CharacterSets::new(
            "零一二三四五六七八九",
            "十百千万亿",
            "，。！？：；、“”《》（）",
        )))
    }

    fn pairs(tokens: &[Token]) -> Vec<(&str, Attribute)> {
        tokens.iter().map(|t| (t.text(), t.attribute())).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(classifier().classify("").is_empty());
    }

    #[test]
    fn test_whitespace_only_input() {
        assert!(classifier().classify(" \t  \u{3000} ").is_empty());
    }

    #[test]
    fn test_single_alpha_run() {
        let tokens = classifier().classify("Hello");
        assert_eq!(pairs(&tokens), vec![("Hello", Attribute::Alpha)]);
    }

    #[test]
    fn test_alpha_number_punctuation() {
        let tokens = classifier().classify("Hello123,");
        assert_eq!(
            pairs(&tokens),
            vec![
                ("Hello", Attribute::Alpha),
                ("123", Attribute::Number),
                (",", Attribute::Punctuation),
            ]
        );
    }

    #[test]
    fn test_decimal_point_stays_in_number() {
        let tokens = classifier().classify("pi3.14");
        assert_eq!(
            pairs(&tokens),
            vec![("pi", Attribute::Alpha), ("3.14", Attribute::Number)]
        );
    }

    #[test]
    fn test_leading_dot_is_punctuation() {
        let tokens = classifier().classify(".5");
        assert_eq!(
            pairs(&tokens),
            vec![(".", Attribute::Punctuation), ("5", Attribute::Number)]
        );
    }

    #[test]
    fn test_dot_after_letters_is_punctuation() {
        let tokens = classifier().classify("end.");
        assert_eq!(
            pairs(&tokens),
            vec![("end", Attribute::Alpha), (".", Attribute::Punctuation)]
        );
    }

    #[test]
    fn test_cjk_ideographs_are_single_codepoint_tokens() {
        let tokens = classifier().classify("你好");
        assert_eq!(
            pairs(&tokens),
            vec![("你", Attribute::Unknown), ("好", Attribute::Unknown)]
        );
    }

    #[test]
    fn test_chinese_numerals_with_continuation() {
        let tokens = classifier().classify("三十个");
        assert_eq!(
            pairs(&tokens),
            vec![("三十", Attribute::Number), ("个", Attribute::Unknown)]
        );
    }

    #[test]
    fn test_continuation_without_numeral_is_unknown() {
        let tokens = classifier().classify("十");
        assert_eq!(pairs(&tokens), vec![("十", Attribute::Unknown)]);
    }

    #[test]
    fn test_continuation_after_ascii_digit() {
        let tokens = classifier().classify("5万");
        assert_eq!(pairs(&tokens), vec![("5万", Attribute::Number)]);
    }

    #[test]
    fn test_chinese_punctuation() {
        let tokens = classifier().classify("好。A");
        assert_eq!(
            pairs(&tokens),
            vec![
                ("好", Attribute::Unknown),
                ("。", Attribute::Punctuation),
                ("A", Attribute::Alpha),
            ]
        );
    }

    #[test]
    fn test_whitespace_separates_runs() {
        let tokens = classifier().classify("Hello  world");
        assert_eq!(
            pairs(&tokens),
            vec![("Hello", Attribute::Alpha), ("world", Attribute::Alpha)]
        );
    }

    #[test]
    fn test_mixed_script_line() {
        let tokens = classifier().classify("A你好,1");
        assert_eq!(
            pairs(&tokens),
            vec![
                ("A", Attribute::Alpha),
                ("你", Attribute::Unknown),
                ("好", Attribute::Unknown),
                (",", Attribute::Punctuation),
                ("1", Attribute::Number),
            ]
        );
    }

    #[test]
    fn test_transition_function_end_of_input() {
        let sets = CharacterSets::default();
        assert_eq!(
            ClassState::next(None, ClassState::Alpha, &sets),
            ClassState::End
        );
    }

    #[test]
    fn test_transition_function_dot_depends_on_last() {
        let sets = CharacterSets::default();
        assert_eq!(
            ClassState::next(Some('.'), ClassState::Number, &sets),
            ClassState::Number
        );
        assert_eq!(
            ClassState::next(Some('.'), ClassState::Alpha, &sets),
            ClassState::Punctuation
        );
    }

    #[test]
    fn test_non_ascii_letters_are_unknown() {
        let sets = CharacterSets::default();
        assert_eq!(
            ClassState::next(Some('é'), ClassState::Alpha, &sets),
            ClassState::Unknown
        );
    }

    #[test]
    fn test_end_state_has_no_attribute() {
        assert_eq!(ClassState::End.attribute(), None);
        assert_eq!(ClassState::Unknown.attribute(), Some(Attribute::Unknown));
    }

    #[test]
    fn test_closed_run_does_not_leak_into_next_token() {
        let tokens = classifier().classify("ab你cd12,");
        assert_eq!(
            pairs(&tokens),
            vec![
                ("ab", Attribute::Alpha),
                ("你", Attribute::Unknown),
                ("cd", Attribute::Alpha),
                ("12", Attribute::Number),
                (",", Attribute::Punctuation),
            ]
        );
    }
}
