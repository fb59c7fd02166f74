// Sample manuscript passages with known characteristics
// WHY: scenario tests need stable inputs whose counts were worked out by hand

/// Three words, one sentence, one syllable each
pub const CAT_SAT: &str = "The cat sat.";

/// One telling sentence with an adverb and an intensifier
pub const ANXIOUS_RUNNER: &str =
    "She was quickly running to the store because she felt very anxious about being late.";

/// Concrete, sensory prose with no telling constructs
pub const SHOWING_TEXT: &str = "Rain hammered the tin roof. Mara pressed her palm against the cold glass. \
A gull shrieked over the harbor. She pulled her coat tight and stepped into the wind.";

/// Prose that states feelings outright
pub const TELLING_TEXT: &str = "He was sad. She felt lonely. They seemed tired. The dog barked twice.";

/// Editor HTML with a heading and two paragraphs
pub const HTML_CHAPTER: &str = "<h1>Chapter One</h1><p>The rain fell on the <em>old</em> house.</p>\
<p>Mara counted the drops&hellip; slowly.</p>";

/// Build a single sentence of exactly `words` words
pub fn sentence_of(words: usize) -> String {
    let mut sentence = vec!["word"; words].join(" ");
    sentence.push('.');
    sentence
}
