use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Thresholds and lexicon extensions for an [`crate::Analyzer`]
///
/// The defaults are English-prose heuristics. Every field can be
/// overridden from a TOML file; missing fields keep their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Plain-text characters below which analysis reports insufficient input
    pub min_length: usize,
    /// Strip HTML before tokenizing
    pub strip_markup: bool,
    /// Syllables at which a word counts as complex (Gunning Fog)
    pub complex_word_syllables: usize,
    /// Sentences with more words are long
    pub long_sentence_words: usize,
    /// Sentences with more words are very long (and not long)
    pub very_long_sentence_words: usize,
    /// Clause count at which a sentence is complex
    pub complex_sentence_clauses: usize,
    /// Telling share above which the manuscript tells too much
    pub telling_threshold: f64,
    /// Flesch-Kincaid grade above which a suggestion is emitted
    pub target_grade: f64,
    pub words_per_minute: u32,
    pub words_per_page: u32,
    pub extra_adverb_stoplist: Vec<String>,
    pub extra_telling_words: Vec<String>,
    pub extra_wordy_phrases: BTreeMap<String, String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_length: 10,
            strip_markup: true,
            complex_word_syllables: 3,
            long_sentence_words: 25,
            very_long_sentence_words: 40,
            complex_sentence_clauses: 4,
            telling_threshold: 0.4,
            target_grade: 12.0,
            words_per_minute: 250,
            words_per_page: 250,
            extra_adverb_stoplist: Vec::new(),
            extra_telling_words: Vec::new(),
            extra_wordy_phrases: BTreeMap::new(),
        }
    }
}

impl AnalyzerConfig {
    /// Load and validate a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading analyzer configuration from {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.very_long_sentence_words <= self.long_sentence_words {
            return Err(ConfigError::invalid(format!(
                "very_long_sentence_words ({}) must exceed long_sentence_words ({})",
                self.very_long_sentence_words, self.long_sentence_words
            )));
        }
        if self.words_per_minute == 0 || self.words_per_page == 0 {
            return Err(ConfigError::invalid("words_per_minute and words_per_page must be positive"));
        }
        if !(0.0..=1.0).contains(&self.telling_threshold) {
            return Err(ConfigError::invalid(format!(
                "telling_threshold ({}) must be within [0, 1]",
                self.telling_threshold
            )));
        }
        if self.complex_word_syllables == 0 || self.complex_sentence_clauses == 0 {
            return Err(ConfigError::invalid(
                "complex_word_syllables and complex_sentence_clauses must be positive",
            ));
        }
        Ok(())
    }
}
