// src/core/mod.rs
pub mod engine;
pub mod table;
pub mod transliterator;
pub mod types;
