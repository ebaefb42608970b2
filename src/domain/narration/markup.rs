//! SSML helpers shared by the orchestrator and provider adapters.

/// Strong break inserted after every paragraph
pub const PAUSE_MARKER: &str = r#"<break strength="x-strong" />"#;

/// Markup for one chunk: the escaped text, plus the pause marker when the
/// chunk closes its paragraph. The marker never counts toward the chunk size
/// and is never split across two requests.
///
/// The size limit applies to the chunk text before escaping. Each `&`, `<`
/// or `>` grows by up to four characters, so a chunk of C characters can
/// produce up to 5 × C characters of markup.
pub fn chunk_markup(text: &str, closes_paragraph: bool) -> String {
    let mut markup = escape_text(text);
    if closes_paragraph {
        markup.push(' ');
        markup.push_str(PAUSE_MARKER);
    }
    markup
}

/// Wrap markup in the `<speak>` root the provider expects
pub fn wrap_speak(markup: &str) -> String {
    format!("<speak>{}</speak>", markup)
}

/// Escape the characters that would otherwise be read as SSML
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
