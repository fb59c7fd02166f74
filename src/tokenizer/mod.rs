// WHY: single tokenization pass shared by statistics and every detector
// Sentences and words are computed once per analysis and borrowed by consumers

pub mod normalization;
pub mod syllables;

pub use normalization::{normalize_whitespace, normalize_whitespace_into};
pub use syllables::count_syllables;

/// Byte range into the normalized text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// One sentence with its words, in original casing
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    pub index: usize,
    pub text: String,
    pub span: Span,
    pub words: Vec<String>,
}

impl Sentence {
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Words lowercased, for lexicon lookups
    pub fn lowercase_words(&self) -> Vec<String> {
        self.words.iter().map(|w| w.to_lowercase()).collect()
    }
}

/// Normalized plain text split into sentences and words
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizedText {
    text: String,
    sentences: Vec<Sentence>,
}

impl TokenizedText {
    /// Tokenize plain text; markup must already be stripped
    pub fn new(plain_text: &str) -> Self {
        let text = normalize_whitespace(plain_text);
        let sentences = split_sentences(&text);
        Self { text, sentences }
    }

    /// Normalized text the spans refer to
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// All words across all sentences
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.sentences.iter().flat_map(|s| s.words.iter().map(String::as_str))
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Terminal punctuation; each run of these ends a sentence
pub fn is_terminal(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Closers that belong to the sentence they follow
fn is_trailing_closer(ch: char) -> bool {
    matches!(ch, '"' | '\'' | '\u{201D}' | '\u{2019}' | ')' | ']' | '}')
}

fn split_sentences(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        if !is_terminal(ch) {
            continue;
        }

        let mut end = pos + ch.len_utf8();
        while let Some(&(next_pos, next)) = chars.peek() {
            if is_terminal(next) || is_trailing_closer(next) {
                end = next_pos + next.len_utf8();
                chars.next();
            } else {
                break;
            }
        }

        push_sentence(text, Span { start, end }, &mut sentences);
        start = end;
    }

    if start < text.len() {
        push_sentence(text, Span { start, end: text.len() }, &mut sentences);
    }

    sentences
}

fn push_sentence(text: &str, span: Span, sentences: &mut Vec<Sentence>) {
    let raw = &text[span.start..span.end];
    let trimmed = raw.trim_start();
    let span = Span {
        start: span.start + (raw.len() - trimmed.len()),
        end: span.end,
    };
    let words = split_words(trimmed);

    // WHY: fragments like "..." or a lone quote carry no words and are not sentences
    if words.is_empty() {
        return;
    }

    sentences.push(Sentence {
        index: sentences.len(),
        text: trimmed.trim_end().to_string(),
        span,
        words,
    });
}

fn is_apostrophe(ch: char) -> bool {
    matches!(ch, '\'' | '\u{2019}')
}

/// Split text into words: alphanumeric runs with internal apostrophes
pub fn split_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch.is_alphanumeric() {
            current.push(ch);
        } else if is_apostrophe(ch)
            && !current.is_empty()
            && chars.peek().is_some_and(|c| c.is_alphanumeric())
        {
            current.push(ch);
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}
