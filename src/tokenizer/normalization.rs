// WHY: manuscripts carry hard line breaks and indentation from the editor;
// tokenization expects single-spaced plain text

/// Collapse every whitespace run (including `\r\n`) into one space and trim both ends
pub fn normalize_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    normalize_whitespace_into(text, &mut result);
    result
}

/// Normalize into a caller-supplied buffer, clearing it first
pub fn normalize_whitespace_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    let mut pending_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            pending_space = !buffer.is_empty();
            continue;
        }
        if pending_space {
            buffer.push(' ');
            pending_space = false;
        }
        buffer.push(ch);
    }
}
