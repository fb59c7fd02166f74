use std::sync::Arc;

use super::{Detector, Finding, FindingKind, Lexicon};
use crate::tokenizer::TokenizedText;

/// Flags sentences that state a feeling instead of showing it
pub struct TellingDetector {
    lexicon: Arc<Lexicon>,
}

impl TellingDetector {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Telling verb anywhere, or "to be" + optional intensifier + emotion
    pub fn is_telling(&self, lowercase_words: &[String]) -> bool {
        lowercase_words.iter().enumerate().any(|(i, word)| {
            if self.lexicon.is_telling_verb(word) {
                return true;
            }
            if !self.lexicon.is_be_form(word) {
                return false;
            }
            let mut next = i + 1;
            if lowercase_words.get(next).is_some_and(|w| self.lexicon.is_intensifier(w)) {
                next += 1;
            }
            lowercase_words.get(next).is_some_and(|w| self.lexicon.is_emotion(w))
        })
    }
}

impl Detector for TellingDetector {
    fn name(&self) -> &str {
        "show_vs_tell"
    }

    fn detect(&self, doc: &TokenizedText) -> Vec<Finding> {
        doc.sentences()
            .iter()
            .filter(|s| self.is_telling(&s.lowercase_words()))
            .map(|s| Finding::new(FindingKind::TellingSentence, s.text.clone()))
            .collect()
    }
}
