use serde::{Deserialize, Serialize};

use crate::tokenizer::{count_syllables, TokenizedText};

/// Raw counts the readability formulas are computed from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStatistics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub syllable_count: usize,
    /// Alphabetic characters inside words
    pub letter_count: usize,
    /// Words at or above the complex-word syllable threshold
    pub complex_word_count: usize,
    /// Characters of the normalized plain text
    pub character_count: usize,
}

impl TextStatistics {
    /// Count words, sentences and syllables of tokenized text
    pub fn from_tokens(doc: &TokenizedText, complex_word_syllables: usize) -> Self {
        let mut stats = Self {
            sentence_count: doc.sentences().len(),
            character_count: doc.text().chars().count(),
            ..Self::default()
        };

        for word in doc.words() {
            let syllables = count_syllables(word);
            stats.word_count += 1;
            stats.syllable_count += syllables;
            stats.letter_count += word.chars().filter(|c| c.is_alphabetic()).count();
            if syllables >= complex_word_syllables {
                stats.complex_word_count += 1;
            }
        }

        stats
    }

    /// Words per sentence, 0 when there are no sentences
    pub fn words_per_sentence(&self) -> f64 {
        ratio(self.word_count, self.sentence_count)
    }

    /// Syllables per word, 0 when there are no words
    pub fn syllables_per_word(&self) -> f64 {
        ratio(self.syllable_count, self.word_count)
    }
}

/// Length estimates for a manuscript
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManuscriptEstimate {
    pub reading_minutes: f64,
    pub pages: u32,
}

impl ManuscriptEstimate {
    /// Estimate reading time and printed pages; zero rates yield zero estimates
    pub fn from_word_count(word_count: usize, words_per_minute: u32, words_per_page: u32) -> Self {
        let reading_minutes = ratio(word_count, words_per_minute as usize);
        let pages = if words_per_page == 0 {
            0
        } else {
            word_count.div_ceil(words_per_page as usize) as u32
        };
        Self {
            reading_minutes,
            pages,
        }
    }
}

/// Division guarded against a zero denominator
pub(crate) fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
