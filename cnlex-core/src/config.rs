//! Segmenter configuration
//!
//! Configuration is a flat TOML table loaded once before any segmentation
//! call. The character class keys are plain strings whose codepoints form
//! the set; whitespace inside them is ignored. All three class keys are
//! required (an empty string is allowed) and unknown keys are rejected, so a
//! misspelled key cannot silently disable a class.

use crate::charset::CharacterSets;
use crate::error::{LexError, Result};
use crate::tagger::EndingTags;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LexConfig {
    /// Codepoints treated as CJK numerals
    pub chinese_number: String,

    /// Codepoints extending a numeral run only after another numeral
    pub chinese_number_end: String,

    /// Codepoints treated as punctuation
    pub chinese_punctuation: String,

    /// Tags that denote a word boundary after the current character
    #[serde(default = "default_ending_tags")]
    pub crf_ending_tags: Vec<String>,

    /// Trained sequence-tagging model
    #[serde(default)]
    pub crf2_model: Option<PathBuf>,
}

fn default_ending_tags() -> Vec<String> {
    vec!["S".to_string(), "E".to_string()]
}

impl Default for LexConfig {
    fn default() -> Self {
        Self {
            chinese_number: String::new(),
            chinese_number_end: String::new(),
            chinese_punctuation: String::new(),
            crf_ending_tags: default_ending_tags(),
            crf2_model: None,
        }
    }
}

impl LexConfig {
    /// Load and validate a configuration file.
    ///
    /// A relative `crf2_model` is resolved against the file's directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LexError::Configuration(format!("Failed to read file '{}': {}", path.display(), e))
        })?;

        let mut config: LexConfig = toml::from_str(&content).map_err(|e| {
            LexError::Configuration(format!(
                "Failed to parse TOML from '{}': {}",
                path.display(),
                e
            ))
        })?;

        if let (Some(model), Some(dir)) = (config.crf2_model.as_ref(), path.parent()) {
            if model.is_relative() {
                config.crf2_model = Some(dir.join(model));
            }
        }

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded segmenter configuration");
        Ok(config)
    }

    /// Parse and validate a configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LexConfig = toml::from_str(content)
            .map_err(|e| LexError::Configuration(format!("Failed to parse TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.crf_ending_tags.is_empty() {
            return Err(LexError::Configuration(
                "crf_ending_tags must not be empty".into(),
            ));
        }

        for tag in &self.crf_ending_tags {
            if tag.is_empty() || tag.chars().any(char::is_whitespace) {
                return Err(LexError::Configuration(format!(
                    "invalid ending tag '{tag}': tags must be non-empty and contain no whitespace"
                )));
            }
        }

        let sets = self.character_sets();
        let shadowed = [
            ("chinese_number", &sets.chinese_numerals),
            ("chinese_number_end", &sets.chinese_numeral_continuation),
        ];
        for (key, set) in shadowed {
            let overlap = set.intersection(&sets.chinese_punctuation);
            if !overlap.is_empty() {
                let chars: String = overlap.into_iter().collect();
                return Err(LexError::Configuration(format!(
                    "codepoints '{chars}' appear in both {key} and chinese_punctuation"
                )));
            }
        }

        Ok(())
    }

    /// Build the immutable character sets
    pub fn character_sets(&self) -> CharacterSets {
        CharacterSets::new(
            &self.chinese_number,
            &self.chinese_number_end,
            &self.chinese_punctuation,
        )
    }

    /// Build the ending tag set
    pub fn ending_tags(&self) -> EndingTags {
        EndingTags::new(self.crf_ending_tags.iter().cloned())
    }

    /// Model path, required by every model-backed tagger
    pub fn model_path(&self) -> Result<&Path> {
        self.crf2_model
            .as_deref()
            .ok_or_else(|| LexError::Configuration("crf2_model is not set".into()))
    }

    /// Commented starter configuration
    pub fn template(model: &str) -> String {
        format!(
            r#"# cnlex segmenter configuration

# CJK digit glyphs, classified as numbers
chinese_number = "零〇一二三四五六七八九两壹贰叁肆伍陆柒捌玖"

# Unit glyphs; they only extend a number that is already running
chinese_number_end = "十百千万亿拾佰仟萬億"

# Punctuation in addition to ASCII punctuation
chinese_punctuation = "，。！？：；、“”‘’《》〈〉（）【】「」『』—…·～"

# Tags that mark the end of a word (the atomic tag "S" is always included)
crf_ending_tags = ["S", "E"]

# Trained sequence-tagging model, relative to this file
crf2_model = "{model}"
"#
        )
    }
}
