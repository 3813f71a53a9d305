// src/lib.rs
//! Transliterate text to ASCII and reduce it to slugs and URL segments.
//!
//! ```
//! use urlify_core::Urlify;
//!
//! let mut urlify = Urlify::new();
//! assert_eq!(urlify.slug(" J'étudie le français "), "jetudie-le-francais");
//! assert_eq!(urlify.url("Petty<br>theft"), "Petty-theft");
//! ```

pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod filters;
pub mod persistence;

pub use crate::config::UrlifyConfig;
pub use crate::core::engine::{SlugOptions, UrlOptions, Urlify};
pub use crate::error::{Result, UrlifyError};
