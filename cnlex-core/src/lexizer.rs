//! Two-stage segmentation pipeline

use crate::charset::CharacterSets;
use crate::classifier::CharacterClassifier;
use crate::config::LexConfig;
use crate::error::Result;
use crate::segmenter::SequenceSegmenter;
use crate::tagger::{EndingTags, SequenceTagger};
use crate::token::Token;
use std::sync::Arc;

/// Shared, read-only state for building one [`Lexizer`] per worker
#[derive(Debug, Clone)]
pub struct LexizerFactory {
    sets: Arc<CharacterSets>,
    ending_tags: Arc<EndingTags>,
}

impl LexizerFactory {
    /// Build the shared character sets and ending tags from a configuration
    pub fn from_config(config: &LexConfig) -> Self {
        Self {
            sets: Arc::new(config.character_sets()),
            ending_tags: Arc::new(config.ending_tags()),
        }
    }

    /// Create a pipeline around its own tagger instance
    pub fn build<T: SequenceTagger>(&self, tagger: T) -> Lexizer<T> {
        Lexizer {
            classifier: CharacterClassifier::new(Arc::clone(&self.sets)),
            segmenter: SequenceSegmenter::new(tagger, Arc::clone(&self.ending_tags)),
        }
    }
}

/// `segment(classify(text))` over one tagger instance
pub struct Lexizer<T: SequenceTagger> {
    classifier: CharacterClassifier,
    segmenter: SequenceSegmenter<T>,
}

impl<T: SequenceTagger> Lexizer<T> {
    /// Create a pipeline directly from a configuration
    pub fn new(config: &LexConfig, tagger: T) -> Self {
        LexizerFactory::from_config(config).build(tagger)
    }

    /// Segment one unit of work (a line or sentence)
    pub fn process(&mut self, text: &str) -> Result<Vec<Token>> {
        let tokens = self.classifier.classify(text);
        tracing::trace!(tokens = tokens.len(), "classified input");
        self.segmenter.segment(tokens)
    }

    /// The first stage
    pub fn classifier(&self) -> &CharacterClassifier {
        &self.classifier
    }

    /// The second stage
    pub fn segmenter(&self) -> &SequenceSegmenter<T> {
        &self.segmenter
    }
}
