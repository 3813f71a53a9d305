// --- File: src/core/table.rs
use crate::core::types::{CharMap, LanguageTag, MappingSet};
use crate::data::base_maps::BASE_MAPS;
use serde::{Deserialize, Serialize};

// --- MapCache: the flattened view used while transliterating ---

/// All mapping sets of a table merged into one lookup, later sets winning.
#[derive(Debug, Clone, Default)]
pub struct MapCache {
    map: CharMap,
    language: LanguageTag,
}

impl MapCache {
    /// Merges `sets` front to back. A key seen again overwrites the earlier replacement.
    fn flatten(sets: &[MappingSet], language: &str) -> Self {
        let mut map = CharMap::new();
        for set in sets {
            for (&c, replacement) in &set.chars {
                map.insert(c, replacement.clone());
            }
        }
        Self { map, language: language.to_string() }
    }

    pub fn get(&self, c: char) -> Option<&str> {
        self.map.get(&c).map(String::as_str)
    }

    pub fn contains(&self, c: char) -> bool {
        self.map.contains_key(&c)
    }

    /// The priority language this cache was built for.
    pub fn language(&self) -> &str {
        &self.language
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }
}

// --- CharTable: the ordered, user-extensible collection of sets ---

/// An ordered list of mapping sets plus the cache derived from it.
///
/// Order is override priority: the last set holding a character decides its
/// replacement. The cache is never serialized and is rebuilt on first use.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharTable {
    sets: Vec<MappingSet>,
    #[serde(skip)]
    cache: Option<MapCache>,
}

impl CharTable {
    /// An empty table. Mostly useful for tests; engines start from `with_base_maps`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A table preloaded with the compiled-in language maps.
    pub fn with_base_maps() -> Self {
        let sets = BASE_MAPS
            .iter()
            .map(|&(tag, table)| MappingSet::from_static(tag, table))
            .collect();
        Self { sets, cache: None }
    }

    /// Inserts `set` under its tag. An existing set with the same tag is dropped
    /// and the new one appended, so it now outranks every other set.
    pub(crate) fn register(&mut self, set: MappingSet) {
        if let Some(tag) = set.tag.as_deref() {
            self.sets.retain(|s| !s.is_named(tag));
            log::debug!("registered language map '{}' ({} chars)", tag, set.chars.len());
        } else {
            log::debug!("appended anonymous map ({} chars)", set.chars.len());
        }
        self.sets.push(set);
        self.invalidate();
    }

    pub fn invalidate(&mut self) {
        self.cache = None;
    }

    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }

    /// Returns the cache for `priority`, rebuilding it if needed.
    ///
    /// An empty `priority`, or the language the cache was built for, reuses the
    /// existing cache. Any other language that names a set moves that set to the
    /// end of the table. The move is permanent: later builds for other languages
    /// start from the reordered table.
    pub fn build_cache(&mut self, priority: &str) -> &MapCache {
        let fresh = matches!(
            &self.cache,
            Some(cache) if priority.is_empty() || cache.language == priority
        );

        if !fresh {
            self.promote(priority);
            self.cache = None;
        }

        let sets = &self.sets;
        self.cache.get_or_insert_with(|| {
            let cache = MapCache::flatten(sets, priority);
            log::debug!(
                "rebuilt character cache for '{}' ({} sets, {} chars)",
                priority,
                sets.len(),
                cache.len()
            );
            cache
        })
    }

    fn promote(&mut self, language: &str) {
        if language.is_empty() {
            return;
        }
        if let Some(pos) = self.sets.iter().position(|s| s.is_named(language)) {
            let set = self.sets.remove(pos);
            self.sets.push(set);
        }
    }

    /// Tags of the named sets in current priority order, lowest first.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.sets.iter().filter_map(|s| s.tag.as_deref())
    }

    pub(crate) fn len(&self) -> usize {
        self.sets.len()
    }
}
