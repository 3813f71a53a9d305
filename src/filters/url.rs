// File: src/filters/url.rs
use crate::filters::stop_words::StopWords;
use crate::filters::truncate_trimmed;
use once_cell::sync::Lazy;
use regex::Regex;

static RE_SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-\s]+").expect("Invalid regex"));
// `<br>`, `<br/>`, `<br />` and `<br class="x">`; whitespace is already a hyphen here.
static RE_LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br\b[^>]*>").expect("Invalid regex"));
static RE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("Invalid regex"));
static RE_DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9-]").expect("Invalid regex"));
static RE_NON_ALNUM_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("Invalid regex"));

/// Reduces already transliterated text to a URL path segment. Case is kept,
/// markup is tolerated, and stop words are only removed when asked for.
///
/// Tag stripping is a pattern match, not a parse: nested or unterminated
/// markup may leave fragments behind.
pub fn urlify(
    text: &str,
    stop_words: &StopWords,
    max_length: usize,
    remove_stop_words: bool,
) -> String {
    let text = if remove_stop_words {
        stop_words.strip(text)
    } else {
        text.to_string()
    };

    let text = RE_SEPARATORS.replace_all(text.trim(), "-");
    let text = RE_LINE_BREAK.replace_all(&text, "-");
    let text = RE_TAG.replace_all(&text, "");
    let text = RE_DISALLOWED.replace_all(&text, "");
    let text = RE_NON_ALNUM_RUN.replace_all(&text, "-");

    truncate_trimmed(&text, max_length)
}
