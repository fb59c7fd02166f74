use super::{Detector, Finding, FindingKind};
use crate::tokenizer::TokenizedText;

/// Buckets sentences by word count; a sentence lands in at most one bucket
pub struct SentenceLengthDetector {
    long_words: usize,
    very_long_words: usize,
}

impl SentenceLengthDetector {
    /// Sentences with more than `long_words` words are long, more than `very_long_words` very long
    pub fn new(long_words: usize, very_long_words: usize) -> Self {
        Self {
            long_words,
            very_long_words,
        }
    }

    pub fn classify(&self, word_count: usize) -> Option<FindingKind> {
        if word_count > self.very_long_words {
            Some(FindingKind::VeryLongSentence)
        } else if word_count > self.long_words {
            Some(FindingKind::LongSentence)
        } else {
            None
        }
    }
}

impl Detector for SentenceLengthDetector {
    fn name(&self) -> &str {
        "sentence_length"
    }

    fn detect(&self, doc: &TokenizedText) -> Vec<Finding> {
        doc.sentences()
            .iter()
            .filter_map(|s| self.classify(s.word_count()).map(|kind| Finding::new(kind, s.text.clone())))
            .collect()
    }
}
