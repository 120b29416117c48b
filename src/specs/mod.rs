// src/specs/mod.rs

pub mod listings;
