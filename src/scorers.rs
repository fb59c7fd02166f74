//! Published readability formulas over [`TextStatistics`].
//!
//! Every scorer returns `0.0` when the text has no words or no sentences.

use serde::{Deserialize, Serialize};

use crate::statistics::{ratio, TextStatistics};

fn has_content(stats: &TextStatistics) -> bool {
    stats.word_count > 0 && stats.sentence_count > 0
}

/// Flesch Reading Ease: higher is easier, roughly 0–100 for prose
pub fn flesch_reading_ease(stats: &TextStatistics) -> f64 {
    if !has_content(stats) {
        return 0.0;
    }
    206.835 - 1.015 * stats.words_per_sentence() - 84.6 * stats.syllables_per_word()
}

/// Flesch-Kincaid Grade Level: U.S. school grade
pub fn flesch_kincaid_grade(stats: &TextStatistics) -> f64 {
    if !has_content(stats) {
        return 0.0;
    }
    0.39 * stats.words_per_sentence() + 11.8 * stats.syllables_per_word() - 15.59
}

/// Gunning Fog index
pub fn gunning_fog(stats: &TextStatistics) -> f64 {
    if !has_content(stats) {
        return 0.0;
    }
    let complex_share = ratio(stats.complex_word_count, stats.word_count);
    0.4 * (stats.words_per_sentence() + 100.0 * complex_share)
}

/// Coleman-Liau index from letters and sentences per 100 words
pub fn coleman_liau(stats: &TextStatistics) -> f64 {
    if !has_content(stats) {
        return 0.0;
    }
    let letters_per_100 = ratio(stats.letter_count, stats.word_count) * 100.0;
    let sentences_per_100 = ratio(stats.sentence_count, stats.word_count) * 100.0;
    0.0588 * letters_per_100 - 0.296 * sentences_per_100 - 15.8
}

/// Interpretation band of a Flesch Reading Ease score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReadingLevel {
    VeryEasy,
    Easy,
    FairlyEasy,
    Standard,
    FairlyDifficult,
    Difficult,
    VeryConfusing,
}

impl ReadingLevel {
    pub fn from_reading_ease(score: f64) -> Self {
        match score {
            s if s >= 90.0 => Self::VeryEasy,
            s if s >= 80.0 => Self::Easy,
            s if s >= 70.0 => Self::FairlyEasy,
            s if s >= 60.0 => Self::Standard,
            s if s >= 50.0 => Self::FairlyDifficult,
            s if s >= 30.0 => Self::Difficult,
            _ => Self::VeryConfusing,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryEasy => "very easy",
            Self::Easy => "easy",
            Self::FairlyEasy => "fairly easy",
            Self::Standard => "standard",
            Self::FairlyDifficult => "fairly difficult",
            Self::Difficult => "difficult",
            Self::VeryConfusing => "very confusing",
        }
    }
}
