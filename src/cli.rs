// src/cli.rs

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::consts::{DEFAULT_QUERY, REQUEST_PAUSE_MS};
use crate::config::options::{CitySelector, ReportOptions, ScrapeOptions};
use crate::progress::Progress;
use crate::{normalize, report, scrape, store};

#[derive(Parser)]
#[command(name = "job_scrape", version, about = "Scrape job listings and report salaries by city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scrape the configured cities into a listings CSV
    Scrape {
        /// Search query term
        #[arg(short, long, default_value = DEFAULT_QUERY)]
        query: String,

        /// Restrict to one configured city
        #[arg(long)]
        city: Option<String>,

        /// Cap the page offset walked per city
        #[arg(long)]
        max_offset: Option<u32>,

        /// Output CSV path
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Pause between requests, in milliseconds
        #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
        pause_ms: u64,
    },

    /// Clean a listings CSV and render the per-city charts
    Report {
        /// Listings CSV produced by `scrape`
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Directory for the chart images
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Scrape {
            query,
            city,
            max_offset,
            out,
            pause_ms,
        } => {
            let defaults = ScrapeOptions::default();
            let opts = ScrapeOptions {
                query,
                cities: city.map_or(CitySelector::All, CitySelector::One),
                max_offset,
                out: out.unwrap_or(defaults.out),
                pause_ms,
            };
            run_scrape(&opts)
        }
        Command::Report { input, out_dir } => {
            let defaults = ReportOptions::default();
            let opts = ReportOptions {
                input: input.unwrap_or(defaults.input),
                out_dir: out_dir.unwrap_or(defaults.out_dir),
            };
            run_report(&opts)
        }
    }
}

fn run_scrape(opts: &ScrapeOptions) -> anyhow::Result<()> {
    let mut progress = CliProgress;
    let listings = scrape::run(opts, Some(&mut progress))?;
    store::save_listings(&opts.out, &listings)?;
    println!("{} listings -> {}", listings.len(), opts.out.display());
    Ok(())
}

fn run_report(opts: &ReportOptions) -> anyhow::Result<()> {
    let listings = store::load_listings(&opts.input)?;
    let (records, stats) = normalize::clean(&listings);

    println!(
        "{} rows in, {} kept ({} no salary, {} duplicates, {} no city, {} odd period, {} malformed salary)",
        stats.input,
        stats.kept,
        stats.missing_salary,
        stats.duplicates,
        stats.unresolvable_city,
        stats.unclassifiable_period,
        stats.malformed_salary,
    );

    let reports = report::aggregate(&records);
    println!("{:<20} {:>9} {:>16}", "City", "Postings", "Mean max ($/yr)");
    for r in &reports {
        println!(
            "{:<20} {:>9} {:>16.0}",
            r.city, r.postings, r.mean_max_salary
        );
    }

    for path in report::render_charts(&reports, &opts.out_dir)? {
        println!("wrote {}", path.display());
    }
    Ok(())
}

/* ---------------- CLI progress sink ---------------- */

struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        eprintln!("Scraping {total} cities...");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn page_done(&mut self, city: &str, offset: u32, rows: usize) {
        eprintln!("  {city} @ {offset}: {rows} rows");
    }
    fn city_done(&mut self, city: &str, total_rows: usize) {
        eprintln!("{city}: {total_rows} rows");
    }
    fn finish(&mut self) {
        eprintln!("Done.");
    }
}
