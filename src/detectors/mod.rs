// WHY: every prose heuristic is a Detector applied uniformly by the analyzer,
// so lexicons and thresholds can change without touching the scoring pipeline

use std::sync::Arc;

use crate::config::AnalyzerConfig;
use crate::error::ConfigError;
use crate::tokenizer::TokenizedText;

pub mod adverbs;
pub mod complexity;
pub mod lexicon;
pub mod passive;
pub mod sentence_length;
pub mod show_tell;
pub mod wordy;

pub use adverbs::AdverbDetector;
pub use complexity::ComplexSentenceDetector;
pub use lexicon::Lexicon;
pub use passive::PassiveVoiceDetector;
pub use sentence_length::SentenceLengthDetector;
pub use show_tell::TellingDetector;
pub use wordy::WordyPhraseDetector;

/// Category of a detector hit
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FindingKind {
    PassiveVoice,
    Adverb,
    WordyPhrase,
    LongSentence,
    VeryLongSentence,
    ComplexSentence,
    TellingSentence,
    /// Produced by caller-registered detectors
    Custom(String),
}

/// One detector hit: a sentence, word or phrase, with an optional replacement
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    pub kind: FindingKind,
    pub text: String,
    pub suggestion: Option<String>,
}

impl Finding {
    pub fn new(kind: FindingKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// A pure function from tokenized text to findings
///
/// Implementations must be deterministic: identical input yields identical
/// findings in identical order.
pub trait Detector: Send + Sync {
    /// Stable name used in logs
    fn name(&self) -> &str;

    fn detect(&self, doc: &TokenizedText) -> Vec<Finding>;
}

/// Build the default detector set from configuration
pub fn default_detectors(config: &AnalyzerConfig) -> Result<Vec<Box<dyn Detector>>, ConfigError> {
    let lexicon = Arc::new(Lexicon::new(
        &config.extra_adverb_stoplist,
        &config.extra_telling_words,
        &config.extra_wordy_phrases,
    ));

    let detectors: Vec<Box<dyn Detector>> = vec![
        Box::new(PassiveVoiceDetector::new(Arc::clone(&lexicon))?),
        Box::new(AdverbDetector::new(Arc::clone(&lexicon))?),
        Box::new(WordyPhraseDetector::new(Arc::clone(&lexicon))),
        Box::new(SentenceLengthDetector::new(
            config.long_sentence_words,
            config.very_long_sentence_words,
        )),
        Box::new(ComplexSentenceDetector::new(
            Arc::clone(&lexicon),
            config.complex_sentence_clauses,
        )),
        Box::new(TellingDetector::new(lexicon)),
    ];

    Ok(detectors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_detector_names_unique() {
        let detectors = default_detectors(&AnalyzerConfig::default()).unwrap();
        let mut names: Vec<_> = detectors.iter().map(|d| d.name().to_string()).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
        assert_eq!(total, 6);
    }

    #[test]
    fn test_finding_builder() {
        let finding = Finding::new(FindingKind::WordyPhrase, "in order to").with_suggestion("to");
        assert_eq!(finding.text, "in order to");
        assert_eq!(finding.suggestion.as_deref(), Some("to"));
    }
}
