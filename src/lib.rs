// src/lib.rs

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod error;
pub mod normalize;
pub mod progress;
pub mod report;
pub mod scrape;
pub mod store;

pub use error::Error;
