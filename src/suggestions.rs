use crate::analyzer::ReadabilityScores;
use crate::config::AnalyzerConfig;

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Human-readable advice derived from finished scores, most structural first
pub fn build(scores: &ReadabilityScores, config: &AnalyzerConfig) -> Vec<String> {
    let mut advice = Vec::new();

    if !scores.very_long_sentences.is_empty() {
        advice.push(format!(
            "{} over {} words; split them",
            plural(scores.very_long_sentences.len(), "very long sentence", "very long sentences"),
            config.very_long_sentence_words
        ));
    }

    if !scores.long_sentences.is_empty() {
        advice.push(format!(
            "{} over {} words; consider shortening",
            plural(scores.long_sentences.len(), "long sentence", "long sentences"),
            config.long_sentence_words
        ));
    }

    if !scores.complex_sentences.is_empty() {
        advice.push(format!(
            "{} with many clauses; simplify the structure",
            plural(scores.complex_sentences.len(), "sentence", "sentences")
        ));
    }

    if !scores.passive_voice.is_empty() {
        advice.push(format!(
            "{} in passive voice; prefer active verbs",
            plural(scores.passive_voice.len(), "sentence", "sentences")
        ));
    }

    if let Some(first) = scores.adverbs.first() {
        advice.push(format!(
            "{} (e.g. \"{first}\"); a stronger verb often replaces them",
            plural(scores.adverbs.len(), "adverb", "adverbs")
        ));
    }

    for (phrase, replacement) in &scores.wordy_phrases {
        if replacement.is_empty() {
            advice.push(format!("Cut \"{phrase}\""));
        } else {
            advice.push(format!("Replace \"{phrase}\" with \"{replacement}\""));
        }
    }

    if scores.show_vs_tell.excessive_telling {
        let share = (1.0 - scores.show_vs_tell.ratio) * 100.0;
        advice.push(format!(
            "{share:.0}% of sentences tell rather than show; describe actions and sensations instead"
        ));
    }

    if scores.flesch_kincaid > config.target_grade {
        advice.push(format!(
            "Grade level {:.1} is above the target of {:.1}",
            scores.flesch_kincaid, config.target_grade
        ));
    }

    advice
}

#[cfg(test)]
mod tests {
    use crate::analyzer::{analyze_text, AnalysisOptions};

    #[test]
    fn test_clean_text_has_no_suggestions() {
        let scores = analyze_text("The cat sat on the mat. The dog ran.", &AnalysisOptions::default()).unwrap();
        assert!(scores.suggestions.is_empty(), "{:?}", scores.suggestions);
    }

    #[test]
    fn test_suggestions_cover_findings() {
        let scores = analyze_text(
            "In order to win, the race was won slowly. He was sad.",
            &AnalysisOptions::default(),
        )
        .unwrap();

        let joined = scores.suggestions.join("\n");
        assert!(joined.contains("1 sentence in passive voice"));
        assert!(joined.contains("1 adverb (e.g. \"slowly\")"));
        assert!(joined.contains("Replace \"in order to\" with \"to\""));
        assert!(joined.contains("tell rather than show"));
    }
}
