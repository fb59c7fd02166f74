// Scenario and property tests for the public analysis API
// WHY: the library boundary is analyze_text; these pin its observable contract

use authorify_readability::{
    analyze_text, scorers, AnalysisOptions, Analyzer, AnalyzerConfig, InsufficientInputError, TextStatistics,
};

#[path = "integration/fixtures/mod.rs"]
mod fixtures;
use fixtures::*;

fn analyze(text: &str) -> authorify_readability::ReadabilityScores {
    analyze_text(text, &AnalysisOptions::default()).expect("Analysis should succeed")
}

#[test]
fn test_cat_sat_scenario() {
    let scores = analyze(CAT_SAT);
    assert_eq!(scores.stats.word_count, 3);
    assert_eq!(scores.stats.sentence_count, 1);
    assert_eq!(scores.stats.syllable_count, 3);
    assert!(scores.passive_voice.is_empty());
    assert!(scores.adverbs.is_empty());
}

#[test]
fn test_anxious_runner_scenario() {
    let scores = analyze(ANXIOUS_RUNNER);

    assert!(scores.adverbs.contains(&"quickly".to_string()));
    // "very" is a degree intensifier without the -ly ending, never an adverb finding
    assert!(!scores.adverbs.contains(&"very".to_string()));

    assert_eq!(scores.show_vs_tell.telling_sentences, vec![ANXIOUS_RUNNER.to_string()]);
    assert_eq!(scores.show_vs_tell.ratio, 0.0);
    assert!(scores.show_vs_tell.excessive_telling);
    assert!(scores.passive_voice.is_empty());
}

#[test]
fn test_empty_input_is_insufficient() {
    assert_eq!(
        analyze_text("", &AnalysisOptions::default()),
        Err(InsufficientInputError {
            length: 0,
            words: 0,
            min_length: 10
        })
    );
}

#[test]
fn test_short_input_never_scored() {
    for text in ["Hi.", "   ", "<p>Ok.</p>", "Yes! No?"] {
        assert!(analyze_text(text, &AnalysisOptions::default()).is_err(), "input: {text:?}");
    }
}

#[test]
fn test_sentence_length_buckets_exclusive() {
    let forty = sentence_of(40);
    let sixty = sentence_of(60);
    let text = format!("{forty} {sixty} {}", sentence_of(10));
    let scores = analyze(&text);

    assert_eq!(scores.long_sentences, vec![forty]);
    assert_eq!(scores.very_long_sentences, vec![sixty.clone()]);
    assert!(!scores.long_sentences.contains(&sixty));
}

#[test]
fn test_repeated_analysis_identical() {
    for text in [CAT_SAT, ANXIOUS_RUNNER, SHOWING_TEXT, TELLING_TEXT, HTML_CHAPTER] {
        assert_eq!(analyze(text), analyze(text));
    }
}

#[test]
fn test_syllables_at_least_words() {
    for text in [CAT_SAT, ANXIOUS_RUNNER, SHOWING_TEXT, TELLING_TEXT, HTML_CHAPTER, "Hmm, 42 brr. Psst tsk tsk."] {
        let stats = analyze(text).stats;
        assert!(stats.syllable_count >= stats.word_count, "input: {text:?}");
    }
}

#[test]
fn test_longer_sentences_raise_grade() {
    // same words and syllables, fewer sentences
    let base = TextStatistics {
        word_count: 120,
        sentence_count: 12,
        syllable_count: 180,
        letter_count: 540,
        complex_word_count: 10,
        character_count: 700,
    };
    let mut previous = base;
    for sentences in [10, 8, 6, 4, 2] {
        let next = TextStatistics {
            sentence_count: sentences,
            ..base
        };
        assert!(scorers::flesch_kincaid_grade(&next) > scorers::flesch_kincaid_grade(&previous));
        assert!(scorers::flesch_reading_ease(&next) < scorers::flesch_reading_ease(&previous));
        previous = next;
    }
}

#[test]
fn test_showing_versus_telling_prose() {
    let showing = analyze(SHOWING_TEXT);
    assert_eq!(showing.show_vs_tell.ratio, 1.0);
    assert!(showing.show_vs_tell.telling_sentences.is_empty());
    assert!(!showing.show_vs_tell.excessive_telling);

    let telling = analyze(TELLING_TEXT);
    assert_eq!(telling.show_vs_tell.telling_sentences.len(), 3);
    assert!((telling.show_vs_tell.ratio - 0.25).abs() < 1e-9);
    assert!(telling.show_vs_tell.excessive_telling);
    assert!(telling.suggestions.iter().any(|s| s.contains("tell rather than show")));
}

#[test]
fn test_html_chapter_stripped() {
    let scores = analyze(HTML_CHAPTER);
    assert_eq!(scores.stats.sentence_count, 2);
    assert_eq!(scores.stats.word_count, 14);
    assert_eq!(scores.adverbs, vec!["slowly".to_string()]);
}

#[test]
fn test_wordy_phrases_mapped_to_replacements() {
    let scores = analyze("Due to the fact that the bridge was out, we drove in order to arrive.");
    assert_eq!(scores.wordy_phrases.get("due to the fact that").map(String::as_str), Some("because"));
    assert_eq!(scores.wordy_phrases.get("in order to").map(String::as_str), Some("to"));
}

#[test]
fn test_configured_thresholds_apply() {
    let config = AnalyzerConfig {
        long_sentence_words: 5,
        very_long_sentence_words: 8,
        extra_adverb_stoplist: vec!["quickly".to_string()],
        ..AnalyzerConfig::default()
    };
    let analyzer = Analyzer::new(config).expect("Config should be valid");
    let scores = analyzer
        .analyze(ANXIOUS_RUNNER, &AnalysisOptions::default())
        .expect("Analysis should succeed");

    assert!(scores.adverbs.is_empty());
    assert_eq!(scores.very_long_sentences.len(), 1);
    assert!(scores.long_sentences.is_empty());
}

#[test]
fn test_scores_serialize_camel_case() {
    let value = serde_json::to_value(analyze(CAT_SAT)).expect("Scores should serialize");
    assert_eq!(value["stats"]["wordCount"], 3);
    assert!(value["fleschReading"].is_number());
    assert!(value["showVsTell"]["tellingSentences"].is_array());
    assert_eq!(value["readingLevel"], "veryEasy");
}

#[test]
fn test_wordless_input_is_insufficient() {
    for text in ["............ !!!! ????", "<p>--- *** ---</p> <hr> ... ..."] {
        let err = analyze_text(text, &AnalysisOptions::with_min_length(0))
            .expect_err("Wordless text should be insufficient");
        assert_eq!(err.words, 0, "input: {text:?}");
    }

    let err = analyze_text("............ !!!! ????", &AnalysisOptions::default()).unwrap_err();
    assert_eq!(err.length, 22);
    assert_eq!(err.min_length, 10);
}

#[test]
fn test_non_latin_script_scored() {
    let scores = analyze("Привет, мир. Как дела у тебя?");
    assert_eq!(scores.stats.word_count, 6);
    assert_eq!(scores.stats.sentence_count, 2);
    assert!(scores.flesch_reading.is_finite());
    assert!(scores.coleman_liau.is_finite());

    let cjk = analyze("你好世界。今天天气很好。");
    assert_eq!(cjk.stats.sentence_count, 1);
    assert!(cjk.stats.word_count > 0);
}

#[test]
fn test_stray_markup_and_unusual_punctuation() {
    let stray = analyze("a < b && c > d; x &unknown; y <p tag.");
    assert_eq!(stray.stats.sentence_count, 1);
    assert_eq!(stray.stats.word_count, 9);

    let punctuated = analyze("Wait... what?! Really?!?? Yes\u{2014}no; maybe.");
    assert_eq!(punctuated.stats.sentence_count, 4);
    assert_eq!(punctuated.stats.word_count, 6);
}

#[test]
fn test_named_entities_do_not_add_words() {
    let scores = analyze("The caf&eacute; served a cr&egrave;me br&ucirc;l&eacute;e.");
    assert_eq!(scores.stats.word_count, 5);
}

#[test]
fn test_predicate_adjectives_not_passive() {
    let scores = analyze("The grass was green. He was keen to go. The door is open.");
    assert!(scores.passive_voice.is_empty(), "{:?}", scores.passive_voice);

    let passive = analyze("The letter was written in haste. The grass was green.");
    assert_eq!(passive.passive_voice, vec!["The letter was written in haste.".to_string()]);
}

#[test]
fn test_names_ending_in_ly_not_adverbs() {
    let scores = analyze("Then Emily waved at Kelly and Billy's dog barked loudly.");
    assert_eq!(scores.adverbs, vec!["loudly".to_string()]);
}
