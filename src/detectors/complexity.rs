use std::sync::Arc;

use super::{Detector, Finding, FindingKind, Lexicon};
use crate::tokenizer::TokenizedText;

/// Flags sentences with many clauses, counted from clause punctuation and subordinators
pub struct ComplexSentenceDetector {
    lexicon: Arc<Lexicon>,
    min_clauses: usize,
}

impl ComplexSentenceDetector {
    pub fn new(lexicon: Arc<Lexicon>, min_clauses: usize) -> Self {
        Self { lexicon, min_clauses }
    }

    /// One plus every `,` `;` `:` and clause-opening word
    pub fn clause_count(&self, text: &str, lowercase_words: &[String]) -> usize {
        let punctuation = text.chars().filter(|c| matches!(c, ',' | ';' | ':')).count();
        let markers = lowercase_words
            .iter()
            .filter(|w| self.lexicon.is_clause_marker(w))
            .count();
        1 + punctuation + markers
    }
}

impl Detector for ComplexSentenceDetector {
    fn name(&self) -> &str {
        "complex_sentences"
    }

    fn detect(&self, doc: &TokenizedText) -> Vec<Finding> {
        doc.sentences()
            .iter()
            .filter(|s| self.clause_count(&s.text, &s.lowercase_words()) >= self.min_clauses)
            .map(|s| Finding::new(FindingKind::ComplexSentence, s.text.clone()))
            .collect()
    }
}
