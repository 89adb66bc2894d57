//! Small helpers for string-rendered markup.

/// Merge class-name fragments into one `class` value.
///
/// Empty fragments and repeated tokens are dropped; the first occurrence of
/// each token keeps its position. Merging an already merged value returns it
/// unchanged.
#[must_use]
pub fn cn(fragments: &[&str]) -> String {
    let mut tokens: Vec<&str> = Vec::new();
    for token in fragments.iter().flat_map(|f| f.split_whitespace()) {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens.join(" ")
}

/// Escape text for use in element content or a quoted attribute.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
