//! Escaping and excerpting of record text.
//!
//! Every record-sourced string passes through [`escape_html`] on its way
//! into markup, in every view. Author content is never interpreted.

/// Marker appended to truncated excerpts.
pub const EXCERPT_MARKER: &str = "...";

/// Number of description characters shown on a grid card.
pub const EXCERPT_LEN: usize = 120;

/// Escape the HTML-significant characters in `s`.
///
/// `&` is replaced first so the entities produced by the later replacements
/// are not escaped again.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// First `max_chars` characters of `text`, with [`EXCERPT_MARKER`] appended
/// only when something was cut off.
///
/// Counts characters, not bytes, so multi-byte text truncates cleanly. The
/// result is still raw text; escape it before interpolating into markup.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}{EXCERPT_MARKER}")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_five_significant_chars() {
        assert_eq!(
            escape_html(r#"<a href="x">&'go'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#x27;go&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape_html("Beach cleanup at 9am"), "Beach cleanup at 9am");
    }

    #[test]
    fn existing_entities_are_escaped_again() {
        // The escaper is not entity-aware on purpose: what was written in
        // the data file is what the reader sees.
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn short_text_is_untouched() {
        let fifty = "x".repeat(50);
        assert_eq!(excerpt(&fifty, EXCERPT_LEN), fifty);
    }

    #[test]
    fn exact_limit_gets_no_marker() {
        let exact = "y".repeat(120);
        assert_eq!(excerpt(&exact, EXCERPT_LEN), exact);
    }

    #[test]
    fn long_text_truncates_with_marker() {
        let long = "z".repeat(150);
        let cut = excerpt(&long, EXCERPT_LEN);
        assert_eq!(cut.chars().count(), 120 + EXCERPT_MARKER.len());
        assert!(cut.starts_with(&"z".repeat(120)));
        assert!(cut.ends_with(EXCERPT_MARKER));
    }

    #[test]
    fn one_past_the_limit_truncates() {
        let text = "a".repeat(121);
        assert_eq!(excerpt(&text, EXCERPT_LEN), format!("{}...", "a".repeat(120)));
    }

    #[test]
    fn multibyte_text_truncates_on_char_boundaries() {
        let text = "ö".repeat(130);
        let cut = excerpt(&text, EXCERPT_LEN);
        assert_eq!(cut.chars().count(), 120 + EXCERPT_MARKER.len());
        assert!(cut.starts_with('ö'));
    }

    #[test]
    fn escape_after_excerpt_keeps_the_marker() {
        let spicy = format!("{}<b>bold</b>", "d".repeat(118));
        let cut = excerpt(&spicy, EXCERPT_LEN);
        // 118 d's plus "<b" fill the 120 chars, then the marker.
        assert!(cut.ends_with(EXCERPT_MARKER));
        let escaped = escape_html(&cut);
        assert!(escaped.contains("&lt;b"));
        assert!(!escaped.contains("<b"));
    }
}
