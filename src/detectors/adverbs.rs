use std::collections::HashSet;
use std::sync::Arc;

use regex_automata::meta::Regex;

use super::{Detector, Finding, FindingKind, Lexicon};
use crate::error::ConfigError;
use crate::tokenizer::TokenizedText;

const ADVERB_PATTERN: &str = r"(?i)\b[a-z]+ly\b";

/// Reports "-ly" adverbs, lowercased, once each in order of first appearance
///
/// Capitalized words inside a sentence are treated as names ("Emily", "Kelly").
pub struct AdverbDetector {
    pattern: Regex,
    lexicon: Arc<Lexicon>,
}

impl AdverbDetector {
    pub fn new(lexicon: Arc<Lexicon>) -> Result<Self, ConfigError> {
        let pattern = Regex::new(ADVERB_PATTERN).map_err(|e| ConfigError::pattern("adverb", e))?;
        Ok(Self { pattern, lexicon })
    }
}

impl Detector for AdverbDetector {
    fn name(&self) -> &str {
        "adverbs"
    }

    fn detect(&self, doc: &TokenizedText) -> Vec<Finding> {
        let mut seen = HashSet::new();
        let mut findings = Vec::new();

        for sentence in doc.sentences() {
            let text = sentence.text.as_str();
            for m in self.pattern.find_iter(text) {
                let matched = &text[m.start()..m.end()];
                if is_capitalized(matched) && !opens_sentence(&text[..m.start()]) {
                    continue;
                }
                let word = matched.to_lowercase();
                if self.lexicon.is_adverb_stopword(&word) || !seen.insert(word.clone()) {
                    continue;
                }
                findings.push(Finding::new(FindingKind::Adverb, word));
            }
        }

        findings
    }
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// True when nothing but punctuation or spacing precedes the word
fn opens_sentence(before: &str) -> bool {
    !before.chars().any(char::is_alphanumeric)
}
