// src/filters/mod.rs
pub mod slug;
pub mod stop_words;
pub mod url;

/// Keeps the first `max_length` characters and trims hyphens left at either edge.
pub(crate) fn truncate_trimmed(text: &str, max_length: usize) -> String {
    let end = text
        .char_indices()
        .nth(max_length)
        .map_or(text.len(), |(i, _)| i);
    text[..end].trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::truncate_trimmed;

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(truncate_trimmed("äöü-x", 3), "äöü");
        assert_eq!(truncate_trimmed("-ab-", 10), "ab");
        assert_eq!(truncate_trimmed("abc", 0), "");
    }
}
