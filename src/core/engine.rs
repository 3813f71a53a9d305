use crate::config::{UrlifyConfig, DEFAULT_SLUG_LENGTH, DEFAULT_URL_LENGTH};
use crate::core::table::CharTable;
use crate::core::transliterator;
use crate::core::types::MappingSet;
use crate::data::base_maps::DEFAULT_LANGUAGE;
use crate::error::Result;
use crate::filters::{slug::slugify, stop_words::StopWords, url::urlify};
use crate::persistence::{load_from_disk, save_to_disk};
use std::path::{Path, PathBuf};

/// Options for [`Urlify::slug_with`]. `None` falls back to the engine defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlugOptions {
    pub max_length: Option<usize>,
    pub language: Option<String>,
    /// Keep `.` so file extensions survive.
    pub file_name: bool,
}

impl SlugOptions {
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn file_name(mut self, file_name: bool) -> Self {
        self.file_name = file_name;
        self
    }
}

/// Options for [`Urlify::url_with`]. `None` falls back to the engine defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrlOptions {
    pub max_length: Option<usize>,
    pub language: Option<String>,
    pub remove_stop_words: bool,
}

impl UrlOptions {
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn remove_stop_words(mut self, remove: bool) -> Self {
        self.remove_stop_words = remove;
        self
    }
}

// The engine owns the character table, its cache and the stop word list.
// Transliterating may rebuild the cache, so every text operation takes `&mut self`.
#[derive(Debug, Clone)]
pub struct Urlify {
    pub(crate) table: CharTable,
    pub(crate) stop_words: StopWords,
    pub(crate) default_language: String,
    pub(crate) slug_max_length: usize,
    pub(crate) url_max_length: usize,
    state_path: Option<PathBuf>,
}

impl Urlify {
    /// An engine with the base language maps, the default stop words and `"de"`
    /// as priority language.
    pub fn new() -> Self {
        Self::with_language(DEFAULT_LANGUAGE)
    }

    pub fn with_language(language: impl Into<String>) -> Self {
        Self {
            table: CharTable::with_base_maps(),
            stop_words: StopWords::new(),
            default_language: language.into(),
            slug_max_length: DEFAULT_SLUG_LENGTH,
            url_max_length: DEFAULT_URL_LENGTH,
            state_path: None,
        }
    }

    /// Builds an engine and applies every map and stop word from `config`.
    /// Fails on the first malformed map without returning a partial engine.
    pub fn from_config(config: &UrlifyConfig) -> Result<Self> {
        let mut engine = Self::with_language(config.default_language.clone());
        engine.slug_max_length = config.slug_max_length;
        engine.url_max_length = config.url_max_length;

        for map in &config.language_maps {
            engine.register_language_map(&map.tag, &map.chars)?;
        }
        for chars in &config.extra_chars {
            engine.add_chars(chars)?;
        }
        if !config.stop_words.is_empty() {
            engine.add_stop_words(config.stop_words.iter().cloned());
        }
        Ok(engine)
    }

    /// Restores a snapshot written by [`Urlify::save_state`], or starts fresh when
    /// the file is missing or unreadable. The path is remembered for saving.
    pub fn from_file_or_new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let mut engine = load_from_disk(path).unwrap_or_else(|e| {
            log::info!("starting with a fresh engine ({}): {}", path.display(), e);
            Self::new()
        });
        engine.state_path = Some(path.to_path_buf());
        engine
    }

    /// Writes the engine to the path it was opened from. Does nothing for
    /// engines not created by [`Urlify::from_file_or_new`].
    pub fn save_state(&self) -> Result<()> {
        match &self.state_path {
            Some(path) => save_to_disk(self, path),
            None => Ok(()),
        }
    }

    /// Adds or replaces the map for `tag`. The map becomes the highest priority set.
    pub fn register_language_map<I, K, V>(&mut self, tag: &str, mapping: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let set = MappingSet::from_pairs(Some(tag), mapping)?;
        self.table.register(set);
        Ok(())
    }

    /// Appends an anonymous map that outranks everything registered so far.
    pub fn add_chars<I, K, V>(&mut self, mapping: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let set = MappingSet::from_pairs(None, mapping)?;
        self.table.register(set);
        Ok(())
    }

    pub fn add_stop_word(&mut self, word: impl Into<String>) {
        self.stop_words.add_word(word);
    }

    pub fn add_stop_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words.add_words(words);
    }

    /// Transliterates with the engine's default language as priority.
    pub fn transliterate(&mut self, text: &str) -> String {
        let language = self.default_language.clone();
        self.transliterate_for(text, &language)
    }

    /// Transliterates with `language` as priority. An empty `language` keeps
    /// whatever priority the last call used.
    ///
    /// Requesting a language moves its map to the end of the table for good,
    /// so it also shapes later calls that ask for a different language.
    pub fn transliterate_for(&mut self, text: &str, language: &str) -> String {
        let cache = self.table.build_cache(language);
        transliterator::transliterate(cache, text)
    }

    /// Alias of [`Urlify::transliterate`].
    pub fn downcode(&mut self, text: &str) -> String {
        self.transliterate(text)
    }

    /// `"Petty theft"` → `"petty-theft"`, using the engine defaults.
    pub fn slug(&mut self, text: &str) -> String {
        self.slug_with(text, &SlugOptions::default())
    }

    /// Alias of [`Urlify::slug`].
    pub fn filter(&mut self, text: &str) -> String {
        self.slug(text)
    }

    pub fn slug_with(&mut self, text: &str, options: &SlugOptions) -> String {
        let max_length = options.max_length.unwrap_or(self.slug_max_length);
        let text = self.transliterate_option(text, options.language.as_deref());
        slugify(&text, &self.stop_words, max_length, options.file_name)
    }

    /// `"Petty<br>theft"` → `"Petty-theft"`, using the engine defaults.
    pub fn url(&mut self, text: &str) -> String {
        self.url_with(text, &UrlOptions::default())
    }

    pub fn url_with(&mut self, text: &str, options: &UrlOptions) -> String {
        let max_length = options.max_length.unwrap_or(self.url_max_length);
        let text = self.transliterate_option(text, options.language.as_deref());
        urlify(&text, &self.stop_words, max_length, options.remove_stop_words)
    }

    fn transliterate_option(&mut self, text: &str, language: Option<&str>) -> String {
        match language {
            Some(language) => self.transliterate_for(text, language),
            None => self.transliterate(text),
        }
    }

    /// Registered language tags, lowest priority first.
    pub fn languages(&self) -> Vec<&str> {
        self.table.languages().collect()
    }

    pub fn stop_words(&self) -> &[String] {
        self.stop_words.words()
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }
}

impl Default for Urlify {
    fn default() -> Self {
        Self::new()
    }
}
