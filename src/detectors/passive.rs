use std::sync::Arc;

use regex_automata::meta::Regex;
use regex_automata::Input;

use super::{Detector, Finding, FindingKind, Lexicon};
use crate::error::ConfigError;
use crate::tokenizer::TokenizedText;

/// "to be" auxiliary, an optional "-ly" adverb, then the candidate participle
const PASSIVE_PATTERN: &str =
    r"(?i)\b(am|is|are|was|were|be|been|being)\s+(?:[a-z]+ly\s+)?([a-z]+)\b";

/// Flags sentences containing a passive construction ("the ball was thrown")
pub struct PassiveVoiceDetector {
    pattern: Regex,
    lexicon: Arc<Lexicon>,
}

impl PassiveVoiceDetector {
    pub fn new(lexicon: Arc<Lexicon>) -> Result<Self, ConfigError> {
        let pattern = Regex::new(PASSIVE_PATTERN).map_err(|e| ConfigError::pattern("passive voice", e))?;
        Ok(Self { pattern, lexicon })
    }

    /// True when any auxiliary in `sentence` is followed by a past participle
    pub fn is_passive(&self, sentence: &str) -> bool {
        let mut caps = self.pattern.create_captures();
        let mut pos = 0;

        while pos < sentence.len() {
            self.pattern
                .search_captures(&Input::new(sentence).range(pos..), &mut caps);
            let (Some(aux), Some(word)) = (caps.get_group(1), caps.get_group(2)) else {
                return false;
            };

            let candidate = sentence[word.start..word.end].to_lowercase();
            if self.lexicon.is_past_participle(&candidate) && !self.lexicon.is_emotion(&candidate) {
                return true;
            }

            // WHY: resume right after the auxiliary so "was being watched" still sees "being watched"
            pos = aux.end;
        }

        false
    }
}

impl Detector for PassiveVoiceDetector {
    fn name(&self) -> &str {
        "passive_voice"
    }

    fn detect(&self, doc: &TokenizedText) -> Vec<Finding> {
        doc.sentences()
            .iter()
            .filter(|s| self.is_passive(&s.text))
            .map(|s| Finding::new(FindingKind::PassiveVoice, s.text.clone()))
            .collect()
    }
}
