use crate::core::table::MapCache;

/// Replaces every character that has an entry in `cache` with its ASCII
/// approximation. Characters without an entry are copied unchanged.
///
/// Runs in one pass over `text`. Replacements are never rescanned, so a
/// replacement containing another key is emitted as-is.
pub fn transliterate(cache: &MapCache, text: &str) -> String {
    // Fast path: nothing to substitute.
    let Some(first) = text.char_indices().find(|&(_, c)| cache.contains(c)).map(|(i, _)| i) else {
        return text.to_string();
    };

    let mut result = String::with_capacity(text.len() + 8);
    result.push_str(&text[..first]);

    for c in text[first..].chars() {
        match cache.get(c) {
            Some(replacement) => result.push_str(replacement),
            None => result.push(c),
        }
    }

    result
}
