// src/scrape.rs
//
// Collector stage: walk the configured (city, state) targets, fetch each
// page offset in turn, and accumulate raw listings. Collect only, no IO;
// the caller decides where the rows go.

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{info, warn};

use crate::config::consts::{OFFSET_START, OFFSET_STEP, TARGETS};
use crate::config::options::ScrapeOptions;
use crate::core::net;
use crate::error::Result;
use crate::progress::Progress;
use crate::specs::listings::{self, Listing};

/// Fetch seam for the page walk, so the loop can be driven without a
/// network (same pattern as the `Progress` parameter).
pub trait PageFetch {
    fn fetch_page(&mut self, query: &str, location: &str, offset: u32) -> Result<String>;
}

/// Live fetcher over the blocking HTTP client.
pub struct HttpFetch {
    client: Client,
}

impl HttpFetch {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: net::client()?,
        })
    }
}

impl PageFetch for HttpFetch {
    fn fetch_page(&mut self, query: &str, location: &str, offset: u32) -> Result<String> {
        net::search_page(&self.client, query, location, offset)
    }
}

/// Scrape all selected targets sequentially over HTTP.
pub fn run(opts: &ScrapeOptions, progress: Option<&mut dyn Progress>) -> Result<Vec<Listing>> {
    let mut fetcher = HttpFetch::new()?;
    run_with(opts, &mut fetcher, progress)
}

/// Walk the selected targets with the given fetcher.
///
/// A failed fetch aborts that page only: the error is logged and the walk
/// continues with the next offset. An empty page ends the city's
/// pagination early.
pub fn run_with(
    opts: &ScrapeOptions,
    fetcher: &mut dyn PageFetch,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<Listing>> {
    let targets: Vec<_> = TARGETS
        .iter()
        .filter(|t| opts.cities.matches(t.0))
        .collect();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(targets.len());
        p.log(&format!("Scraping \"{}\"...", opts.query));
    }

    let mut out: Vec<Listing> = Vec::new();

    for &&(city, state, target_max) in &targets {
        let max_offset = opts.max_offset.unwrap_or(target_max);
        let location = format!("{}, {}", city, state);
        let before = out.len();

        let mut offset = OFFSET_START;
        while offset < max_offset {
            let doc = match fetcher.fetch_page(&opts.query, &location, offset) {
                Ok(doc) => doc,
                Err(e) => {
                    warn!(%city, offset, error = %e, "page request failed, skipping");
                    offset += OFFSET_STEP;
                    continue;
                }
            };

            let rows = listings::parse_doc(&doc);
            if rows.is_empty() {
                // No result cards left; stop paginating this city.
                break;
            }

            if let Some(p) = progress.as_deref_mut() {
                p.page_done(city, offset, rows.len());
            }
            out.extend(rows);

            offset += OFFSET_STEP;
            if opts.pause_ms > 0 {
                thread::sleep(Duration::from_millis(opts.pause_ms)); // be polite
            }
        }

        info!(%city, rows = out.len() - before, "city done");
        if let Some(p) = progress.as_deref_mut() {
            p.city_done(city, out.len() - before);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(out)
}
