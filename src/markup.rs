//! HTML escaping for displaying generator output inside markup

use std::borrow::Cow;

/// Escape markup-significant characters.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Wrap text in a paragraph element, escaped
pub fn render_paragraph(text: &str) -> String {
    format!("<p>{}</p>", escape_html(text))
}
