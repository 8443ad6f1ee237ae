//! Markup stripping for excerpt text.
//!
//! Lookup snippets arrive with inline highlight markup (the Wikipedia search
//! API wraps matches in `<span class="searchmatch">`). Stripping works from
//! an explicit allow-list of tag names so legitimate angle-bracket text in an
//! excerpt is never mangled by an over-eager pattern.

use once_cell::sync::Lazy;
use regex::Regex;

static SPAN_TAGS: Lazy<Regex> = Lazy::new(|| tag_pattern(&["span"]));

/// Removes opening and closing forms of exactly the listed tags from `input`.
///
/// Attributes on opening tags are removed along with the tag. Text content,
/// unlisted tags, and stray `<`/`>` characters pass through unchanged.
pub fn strip_tags(input: &str, tags: &[&str]) -> String {
    if tags.is_empty() {
        return input.to_string();
    }
    tag_pattern(tags).replace_all(input, "").into_owned()
}

/// Strips `<span ...>`/`</span>` markers from a lookup snippet.
///
/// The search API only guarantees span-based highlight markup, so this is
/// the sanitizer applied to every excerpt.
pub fn strip_span_tags(input: &str) -> String {
    SPAN_TAGS.replace_all(input, "").into_owned()
}

fn tag_pattern(tags: &[&str]) -> Regex {
    let names = tags
        .iter()
        .map(|tag| regex::escape(tag))
        .collect::<Vec<_>>()
        .join("|");
    // The alternation only ever holds escaped tag names, so the pattern is
    // valid for any caller-supplied tag list.
    Regex::new(&format!(r"</?(?:{names})(?:\s[^>]*)?>")).expect("tag pattern is valid")
}
