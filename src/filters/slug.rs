// File: src/filters/slug.rs
use crate::filters::stop_words::StopWords;
use crate::filters::truncate_trimmed;
use once_cell::sync::Lazy;
use regex::Regex;

static RE_DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").expect("Invalid regex"));
static RE_DISALLOWED_FILE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_.\s-]").expect("Invalid regex"));
static RE_SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-\s]+").expect("Invalid regex"));

/// Reduces already transliterated text to a lowercase, hyphen-separated slug
/// of at most `max_length` characters.
///
/// Anything the transliteration left non-ASCII is removed here. With
/// `file_name` set, dots survive so extensions are kept.
pub fn slugify(text: &str, stop_words: &StopWords, max_length: usize, file_name: bool) -> String {
    let text = stop_words.strip(text);

    let disallowed = if file_name { &RE_DISALLOWED_FILE_NAME } else { &RE_DISALLOWED };
    let text = disallowed.replace_all(&text, "");
    let text = text.replace('_', " ");
    let text = RE_SEPARATORS.replace_all(text.trim(), "-");
    let text = text.to_lowercase();

    truncate_trimmed(&text, max_length)
}
