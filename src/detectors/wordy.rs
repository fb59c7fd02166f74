use std::sync::Arc;

use super::{Detector, Finding, FindingKind, Lexicon};
use crate::tokenizer::{split_words, TokenizedText};

/// Finds lexicon phrases inside a sentence, matching whole words case-insensitively
pub struct WordyPhraseDetector {
    /// Phrase normalized to space-joined lowercase words, with padding, plus its replacement
    phrases: Vec<(String, String, String)>,
}

impl WordyPhraseDetector {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        let phrases = lexicon
            .wordy_phrases()
            .iter()
            .filter_map(|(phrase, replacement)| {
                let words = split_words(phrase);
                if words.is_empty() {
                    return None;
                }
                let needle = format!(" {} ", words.join(" ").to_lowercase());
                Some((phrase.clone(), needle, replacement.clone()))
            })
            .collect();
        Self { phrases }
    }
}

impl Detector for WordyPhraseDetector {
    fn name(&self) -> &str {
        "wordy_phrases"
    }

    fn detect(&self, doc: &TokenizedText) -> Vec<Finding> {
        let mut findings = Vec::new();

        for sentence in doc.sentences() {
            let haystack = format!(" {} ", sentence.lowercase_words().join(" "));
            for (phrase, needle, replacement) in &self.phrases {
                if haystack.contains(needle.as_str()) {
                    findings.push(
                        Finding::new(FindingKind::WordyPhrase, phrase.clone()).with_suggestion(replacement.clone()),
                    );
                }
            }
        }

        findings
    }
}
