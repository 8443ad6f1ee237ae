//! Paragraph segmentation for loaded documents.
//!
//! A segment is a contiguous span of the source text delimited by a blank
//! line (two consecutive newlines). Segmentation is pure and total: any
//! input, including the empty string, yields a (possibly empty) ordered
//! sequence, and whitespace-only spans are dropped.

/// Splits `text` into paragraph segments on blank-line boundaries.
///
/// Spans whose trimmed content is empty are discarded; the remaining
/// segments keep their original document order.
///
/// # Examples
///
/// ```
/// let segments = parascope::segment("first paragraph\n\nsecond paragraph");
/// assert_eq!(segments, vec!["first paragraph", "second paragraph"]);
/// ```
pub fn segment(text: &str) -> Vec<String> {
    text.split("\n\n")
        .filter(|span| !span.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns a prefix of `text` at most `max_chars` characters long.
///
/// Truncation counts characters, not bytes, so the cut never lands inside a
/// multi-byte sequence. Used for segment labels and for capping lookup
/// queries before they leave the session.
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
