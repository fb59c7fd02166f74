// WHY: editor content arrives as HTML fragments; statistics run on plain text only
// Stripping is lossy by intent and never fails on malformed markup

use html_escape::decode_html_entities;

/// Tags whose boundaries separate words and must not glue text together
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt",
    "figcaption", "figure", "footer", "h1", "h2", "h3", "h4", "h5", "h6",
    "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "table",
    "tbody", "td", "tfoot", "th", "thead", "tr", "ul",
];

/// Tags whose entire body is dropped
const OPAQUE_TAGS: &[&str] = &["script", "style"];

/// Strip HTML tags and decode character entities, producing plain text.
///
/// Unterminated tags and unknown entities are kept verbatim.
pub fn strip_markup(text: &str) -> String {
    if !text.contains('<') {
        return decode_html_entities(text).into_owned();
    }

    // ASCII lowercasing keeps byte offsets aligned with `text`
    let lower = text.to_ascii_lowercase();
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        let Some(ch) = rest.chars().next() else {
            break;
        };

        if ch == '<' {
            if let Some(consumed) = consume_tag(&lower, pos, &mut out) {
                pos += consumed;
                continue;
            }
        }
        out.push(ch);
        pos += ch.len_utf8();
    }

    // decoded after tag removal so "&lt;p&gt;" stays as text
    decode_html_entities(&out).into_owned()
}

/// Try to consume a tag (or comment) starting at `pos`; returns bytes consumed
fn consume_tag(lower: &str, pos: usize, out: &mut String) -> Option<usize> {
    let rest = &lower[pos..];

    if rest.starts_with("<!--") {
        let end = rest.find("-->").map(|i| i + 3).unwrap_or(rest.len());
        return Some(end);
    }

    let next = rest[1..].chars().next()?;
    if !(next.is_ascii_alphabetic() || next == '/' || next == '!' || next == '?') {
        return None;
    }

    let close = rest.find('>')?;
    let inner = &rest[1..close];
    let is_closing = inner.starts_with('/');
    let name: String = inner
        .trim_start_matches('/')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();

    let mut consumed = close + 1;

    if !is_closing && OPAQUE_TAGS.contains(&name.as_str()) {
        let terminator = format!("</{name}");
        match rest[consumed..].find(&terminator) {
            Some(offset) => {
                let after = consumed + offset;
                consumed = rest[after..]
                    .find('>')
                    .map(|i| after + i + 1)
                    .unwrap_or(rest.len());
            }
            None => consumed = rest.len(),
        }
        out.push(' ');
        return Some(consumed);
    }

    if BLOCK_TAGS.contains(&name.as_str()) {
        out.push(' ');
    }

    Some(consumed)
}
