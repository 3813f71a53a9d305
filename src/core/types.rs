// src/core/types.rs
use crate::error::{Result, UrlifyError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A language tag such as `"de"` or `"ru"`.
pub type LanguageTag = String;

/// One source character and the string it transliterates to.
/// The replacement may be empty (the character is dropped) or longer than one char.
pub type CharMap = HashMap<char, String>;

/// A single substitution table, either named after a language or anonymous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingSet {
    /// `None` for sets appended through `add_chars`.
    pub tag: Option<LanguageTag>,
    pub chars: CharMap,
}

impl MappingSet {
    /// Builds a set from string-keyed pairs. Every key must be exactly one character.
    pub fn from_pairs<I, K, V>(tag: Option<&str>, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        if let Some(tag) = tag {
            if tag.trim().is_empty() {
                return Err(UrlifyError::InvalidArgument(
                    "language tag must not be empty".to_string(),
                ));
            }
        }

        let mut chars = CharMap::new();
        for (key, replacement) in pairs {
            let key = key.as_ref();
            let mut it = key.chars();
            match (it.next(), it.next()) {
                (Some(c), None) => {
                    chars.insert(c, replacement.into());
                }
                _ => {
                    return Err(UrlifyError::InvalidArgument(format!(
                        "mapping key {key:?} must be exactly one character"
                    )));
                }
            }
        }

        Ok(Self {
            tag: tag.map(str::to_string),
            chars,
        })
    }

    /// Builds a set from a static table. Used for the compiled-in base dataset.
    pub(crate) fn from_static(tag: &str, table: &[(char, &str)]) -> Self {
        Self {
            tag: Some(tag.to_string()),
            chars: table.iter().map(|&(c, r)| (c, r.to_string())).collect(),
        }
    }

    pub fn is_named(&self, tag: &str) -> bool {
        self.tag.as_deref() == Some(tag)
    }
}
