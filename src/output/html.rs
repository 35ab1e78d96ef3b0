//! HTML rendering of a text report.

/// Escape `text` for an HTML body and turn newlines into `<br />`.
pub fn to_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 64);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\n' => out.push_str("<br />\n"),
            _ => out.push(c),
        }
    }
    out
}
