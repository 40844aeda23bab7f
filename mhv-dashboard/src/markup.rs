//! Minimal inline markup for dashboard prose: `**strong**` and `*emphasis*`.

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape `text` and turn asterisk pairs into `<strong>`/`<em>`.
///
/// Unclosed markers are closed at the end of the text.
pub fn render_inline(text: &str) -> String {
    let escaped = escape_html(text);
    let mut out = String::with_capacity(escaped.len() + 16);
    let mut strong = false;
    let mut em = false;
    let mut rest = escaped.as_str();

    while let Some(pos) = rest.find('*') {
        out.push_str(&rest[..pos]);
        if rest[pos..].starts_with("**") {
            out.push_str(if strong { "</strong>" } else { "<strong>" });
            strong = !strong;
            rest = &rest[pos + 2..];
        } else {
            out.push_str(if em { "</em>" } else { "<em>" });
            em = !em;
            rest = &rest[pos + 1..];
        }
    }
    out.push_str(rest);

    if em {
        out.push_str("</em>");
    }
    if strong {
        out.push_str("</strong>");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_and_em() {
        assert_eq!(
            render_inline("test **Vega-Lite selections** on *Melbourne housing*"),
            "test <strong>Vega-Lite selections</strong> on <em>Melbourne housing</em>"
        );
    }

    #[test]
    fn test_escapes_html() {
        assert_eq!(render_inline("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_unclosed_marker_is_closed() {
        assert_eq!(render_inline("**bold"), "<strong>bold</strong>");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(render_inline("x=Price, y=Distance"), "x=Price, y=Distance");
    }
}
