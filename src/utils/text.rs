//! Text cleanup helpers shared by the extractor and the acquirers

/// Collapse every run of whitespace into a single space and trim the ends.
///
/// Markup text nodes carry indentation and line breaks from the page source;
/// records store the text the way a reader sees it.
///
/// ```
/// # use kodegen_tools_serpscrape::utils::collapse_whitespace;
/// assert_eq!(collapse_whitespace("  Example \n   Site "), "Example Site");
/// ```
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate to at most `max_chars` characters without splitting a UTF-8 sequence.
#[inline]
#[must_use]
pub fn safe_truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((byte_idx, _)) => &s[..byte_idx],
    }
}
