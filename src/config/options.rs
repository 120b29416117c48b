// src/config/options.rs

use std::path::PathBuf;
use super::consts::*;

/// Which of the configured search targets to scrape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CitySelector {
    All,
    One(String),
}

impl CitySelector {
    pub fn matches(&self, city: &str) -> bool {
        match self {
            CitySelector::All => true,
            CitySelector::One(c) => c.eq_ignore_ascii_case(city),
        }
    }
}

/// Collector stage options. Everything the stage needs is passed in
/// explicitly; there is no global path or cwd state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub query: String,
    pub cities: CitySelector,
    /// Cap on the page offset walked per city; `None` uses each target's own.
    pub max_offset: Option<u32>,
    pub out: PathBuf,
    pub pause_ms: u64,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            cities: CitySelector::All,
            max_offset: None,
            out: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_LISTINGS_FILE),
            pause_ms: REQUEST_PAUSE_MS,
        }
    }
}

/// Normalizer/reporter stage options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    pub input: PathBuf,
    pub out_dir: PathBuf,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_LISTINGS_FILE),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}
