// File: src/filters/stop_words.rs
use crate::data::base_maps::DEFAULT_STOP_WORDS;
use regex::Regex;

/// Words removed from text as whole words, ignoring case.
///
/// The matching regex is recompiled every time the list grows, so `strip`
/// itself never has to rebuild anything.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: Vec<String>,
    pattern: Option<Regex>,
}

impl StopWords {
    /// The default English function words.
    pub fn new() -> Self {
        Self::from_words(DEFAULT_STOP_WORDS.iter().copied())
    }

    /// A list holding exactly `words`.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self { words: Vec::new(), pattern: None };
        list.add_words(words);
        list
    }

    pub fn add_word(&mut self, word: impl Into<String>) {
        self.add_words(std::iter::once(word));
    }

    /// Appends words as given. Duplicates are kept.
    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
        self.pattern = compile(&self.words);
    }

    /// Deletes every whole-word match. Whitespace around a removed word is kept.
    pub fn strip(&self, text: &str) -> String {
        match &self.pattern {
            Some(re) => re.replace_all(text, "").into_owned(),
            None => text.to_string(),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new()
    }
}

fn compile(words: &[String]) -> Option<Regex> {
    let alternation = words
        .iter()
        .filter(|w| !w.is_empty())
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    if alternation.is_empty() {
        return None;
    }

    log::trace!("compiling stop word pattern from {} words", words.len());
    // ASCII boundaries: a word glued to an unmapped letter from another script
    // still counts as a whole word.
    match Regex::new(&format!(r"(?i)(?-u:\b)(?:{alternation})(?-u:\b)")) {
        Ok(re) => Some(re),
        Err(e) => {
            log::warn!("stop word removal disabled, pattern failed to compile: {}", e);
            None
        }
    }
}
