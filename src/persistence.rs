// File: src/persistence.rs
use crate::core::engine::Urlify;
use crate::core::table::CharTable;
use crate::error::Result;
use crate::filters::stop_words::StopWords;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// The serializable state of an engine.
/// The table keeps its current priority order; the cache is rebuilt on load.
#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct SerializableState {
    table: CharTable,
    stop_words: Vec<String>,
    default_language: String,
    slug_max_length: usize,
    url_max_length: usize,
}

/// Writes `engine` to `path` atomically: the snapshot goes to a temporary file
/// in the same directory which then replaces the target.
pub fn save_to_disk(engine: &Urlify, path: &Path) -> Result<()> {
    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let state = SerializableState {
        table: engine.table.clone(),
        stop_words: engine.stop_words.words().to_vec(),
        default_language: engine.default_language.clone(),
        slug_max_length: engine.slug_max_length,
        url_max_length: engine.url_max_length,
    };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        bincode::serialize_into(&mut writer, &state)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    log::debug!("saved engine state to {}", path.display());
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<Urlify> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let state: SerializableState = bincode::deserialize_from(reader)?;

    let mut engine = Urlify::with_language(state.default_language);
    engine.table = state.table;
    engine.stop_words = StopWords::from_words(state.stop_words);
    engine.slug_max_length = state.slug_max_length;
    engine.url_max_length = state.url_max_length;

    log::debug!("loaded engine state from {}", path.display());
    Ok(engine)
}
