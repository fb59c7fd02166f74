// WHY: stateless pipeline text -> statistics -> scores -> suggestions
// The Analyzer owns only immutable configuration and detectors; every call is independent

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AnalyzerConfig;
use crate::detectors::{default_detectors, Detector, FindingKind};
use crate::error::{ConfigError, InsufficientInputError};
use crate::markup::strip_markup;
use crate::scorers::{self, ReadingLevel};
use crate::statistics::{ManuscriptEstimate, TextStatistics};
use crate::suggestions;
use crate::tokenizer::TokenizedText;

/// Per-call options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AnalysisOptions {
    /// Overrides the configured minimum plain-text length
    pub min_length: Option<usize>,
}

impl AnalysisOptions {
    pub fn with_min_length(min_length: usize) -> Self {
        Self {
            min_length: Some(min_length),
        }
    }
}

/// Share of sentences that show rather than tell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowVsTell {
    /// `1 - telling / total`, within [0, 1]
    pub ratio: f64,
    pub telling_sentences: Vec<String>,
    /// Telling share exceeds the configured threshold
    pub excessive_telling: bool,
}

/// Full analysis of one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityScores {
    pub flesch_reading: f64,
    pub flesch_kincaid: f64,
    pub gunning_fog: f64,
    pub coleman_liau: f64,
    pub reading_level: ReadingLevel,
    pub average_sentence_length: f64,
    pub average_syllables_per_word: f64,
    pub show_vs_tell: ShowVsTell,
    pub passive_voice: Vec<String>,
    pub adverbs: Vec<String>,
    pub long_sentences: Vec<String>,
    pub very_long_sentences: Vec<String>,
    /// Phrase found in the text -> concise replacement
    pub wordy_phrases: BTreeMap<String, String>,
    pub complex_sentences: Vec<String>,
    /// Findings of caller-registered detectors, by custom kind
    pub custom: BTreeMap<String, Vec<String>>,
    pub stats: TextStatistics,
    pub estimate: ManuscriptEstimate,
    pub suggestions: Vec<String>,
}

/// Readability analyzer: configuration plus the detector pipeline
pub struct Analyzer {
    config: AnalyzerConfig,
    detectors: Vec<Box<dyn Detector>>,
}

impl Analyzer {
    /// Validate configuration and build the default detectors
    pub fn new(config: AnalyzerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let detectors = default_detectors(&config)?;
        debug!("Built analyzer with {} detectors", detectors.len());
        Ok(Self { config, detectors })
    }

    pub fn with_default_config() -> Result<Self, ConfigError> {
        Self::new(AnalyzerConfig::default())
    }

    /// Append a detector to the pipeline
    pub fn with_detector(mut self, detector: Box<dyn Detector>) -> Self {
        self.detectors.push(detector);
        self
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn detector_names(&self) -> Vec<&str> {
        self.detectors.iter().map(|d| d.name()).collect()
    }

    /// Analyze raw text, which may contain HTML
    ///
    /// Fails only when the normalized plain text has no words or is shorter
    /// than the minimum length.
    pub fn analyze(
        &self,
        raw_text: &str,
        options: &AnalysisOptions,
    ) -> Result<ReadabilityScores, InsufficientInputError> {
        let plain = if self.config.strip_markup {
            strip_markup(raw_text)
        } else {
            raw_text.to_string()
        };
        let doc = TokenizedText::new(&plain);

        let length = doc.text().chars().count();
        let min_length = options.min_length.unwrap_or(self.config.min_length);
        // punctuation-only text has no sentences and would score as all zeros
        if doc.is_empty() || length < min_length {
            let words = doc.words().count();
            debug!(length, words, min_length, "Insufficient input for analysis");
            return Err(InsufficientInputError {
                length,
                words,
                min_length,
            });
        }

        let stats = TextStatistics::from_tokens(&doc, self.config.complex_word_syllables);
        let flesch_reading = scorers::flesch_reading_ease(&stats);

        let mut scores = ReadabilityScores {
            flesch_reading,
            flesch_kincaid: scorers::flesch_kincaid_grade(&stats),
            gunning_fog: scorers::gunning_fog(&stats),
            coleman_liau: scorers::coleman_liau(&stats),
            reading_level: ReadingLevel::from_reading_ease(flesch_reading),
            average_sentence_length: stats.words_per_sentence(),
            average_syllables_per_word: stats.syllables_per_word(),
            show_vs_tell: ShowVsTell {
                ratio: 1.0,
                telling_sentences: Vec::new(),
                excessive_telling: false,
            },
            passive_voice: Vec::new(),
            adverbs: Vec::new(),
            long_sentences: Vec::new(),
            very_long_sentences: Vec::new(),
            wordy_phrases: BTreeMap::new(),
            complex_sentences: Vec::new(),
            custom: BTreeMap::new(),
            stats,
            estimate: ManuscriptEstimate::from_word_count(
                stats.word_count,
                self.config.words_per_minute,
                self.config.words_per_page,
            ),
            suggestions: Vec::new(),
        };

        for detector in &self.detectors {
            let findings = detector.detect(&doc);
            debug!(detector = detector.name(), findings = findings.len(), "Detector finished");

            for finding in findings {
                match finding.kind {
                    FindingKind::PassiveVoice => scores.passive_voice.push(finding.text),
                    FindingKind::Adverb => scores.adverbs.push(finding.text),
                    FindingKind::WordyPhrase => {
                        scores
                            .wordy_phrases
                            .insert(finding.text, finding.suggestion.unwrap_or_default());
                    }
                    FindingKind::LongSentence => scores.long_sentences.push(finding.text),
                    FindingKind::VeryLongSentence => scores.very_long_sentences.push(finding.text),
                    FindingKind::ComplexSentence => scores.complex_sentences.push(finding.text),
                    FindingKind::TellingSentence => scores.show_vs_tell.telling_sentences.push(finding.text),
                    FindingKind::Custom(kind) => scores.custom.entry(kind).or_default().push(finding.text),
                }
            }
        }

        let (ratio, telling_share) = show_ratio(scores.show_vs_tell.telling_sentences.len(), stats.sentence_count);
        scores.show_vs_tell.ratio = ratio;
        scores.show_vs_tell.excessive_telling = telling_share > self.config.telling_threshold;

        scores.suggestions = suggestions::build(&scores, &self.config);

        debug!(
            words = stats.word_count,
            sentences = stats.sentence_count,
            flesch_reading = scores.flesch_reading,
            "Analysis complete"
        );

        Ok(scores)
    }
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("config", &self.config)
            .field("detectors", &self.detector_names())
            .finish()
    }
}

/// Show ratio and telling share; no sentences means nothing is told
fn show_ratio(telling: usize, total: usize) -> (f64, f64) {
    if total == 0 {
        return (1.0, 0.0);
    }
    let share = (telling as f64 / total as f64).clamp(0.0, 1.0);
    (1.0 - share, share)
}

static DEFAULT_ANALYZER: Lazy<Analyzer> =
    Lazy::new(|| Analyzer::with_default_config().expect("default analyzer configuration is valid"));

/// Analyze text with the default configuration
pub fn analyze_text(
    raw_text: &str,
    options: &AnalysisOptions,
) -> Result<ReadabilityScores, InsufficientInputError> {
    DEFAULT_ANALYZER.analyze(raw_text, options)
}
