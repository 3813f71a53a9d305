// File: src/config.rs
use crate::data::base_maps::DEFAULT_LANGUAGE;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const DEFAULT_SLUG_LENGTH: usize = 60;
pub const DEFAULT_URL_LENGTH: usize = 200;

/// A named set of extra characters, registered in file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageMapConfig {
    pub tag: String,
    /// Keys must be single characters; checked when the engine is built.
    pub chars: BTreeMap<String, String>,
}

/// Engine settings, usually read from a JSON file:
///
/// ```json
/// {
///   "default_language": "de",
///   "slug_max_length": 80,
///   "stop_words": ["und", "der"],
///   "language_maps": [{ "tag": "eo", "chars": { "ĉ": "cx" } }],
///   "extra_chars": [{ "€": "euro" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlifyConfig {
    pub default_language: String,
    pub slug_max_length: usize,
    pub url_max_length: usize,
    /// Appended to the built-in stop words.
    pub stop_words: Vec<String>,
    pub language_maps: Vec<LanguageMapConfig>,
    /// Anonymous maps, appended after `language_maps`.
    pub extra_chars: Vec<BTreeMap<String, String>>,
}

impl Default for UrlifyConfig {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
            slug_max_length: DEFAULT_SLUG_LENGTH,
            url_max_length: DEFAULT_URL_LENGTH,
            stop_words: Vec::new(),
            language_maps: Vec::new(),
            extra_chars: Vec::new(),
        }
    }
}

impl UrlifyConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        log::debug!("loaded configuration from {}", path.display());
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UrlifyError;

    #[test]
    fn missing_fields_take_defaults() {
        let config = UrlifyConfig::from_json_str(r#"{ "slug_max_length": 20 }"#).unwrap();
        assert_eq!(config.slug_max_length, 20);
        assert_eq!(config.url_max_length, DEFAULT_URL_LENGTH);
        assert_eq!(config.default_language, "de");
        assert!(config.language_maps.is_empty());
    }

    #[test]
    fn parses_maps() {
        let config = UrlifyConfig::from_json_str(
            r#"{ "language_maps": [{ "tag": "eo", "chars": { "ĉ": "cx" } }],
                 "extra_chars": [{ "€": "euro" }] }"#,
        )
        .unwrap();
        assert_eq!(config.language_maps[0].tag, "eo");
        assert_eq!(config.language_maps[0].chars["ĉ"], "cx");
        assert_eq!(config.extra_chars[0]["€"], "euro");
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = UrlifyConfig::from_json_str("{ nope").unwrap_err();
        assert!(matches!(err, UrlifyError::Config(_)));
    }
}
