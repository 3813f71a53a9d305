// src/data/mod.rs
pub mod base_maps;
