// File: src/error.rs
use thiserror::Error;

/// Everything that can go wrong while configuring an engine.
///
/// Transliteration and the slug/url filters never fail; only registration of
/// malformed mapping sets and the file helpers return errors.
#[derive(Debug, Error)]
pub enum UrlifyError {
    /// A mapping set or language tag supplied by the caller is malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The engine snapshot could not be encoded or decoded.
    #[error("engine state encoding failed: {0}")]
    Encode(#[from] bincode::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, UrlifyError>;
