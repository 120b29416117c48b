// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.indeed.com";
pub const DEFAULT_QUERY: &str = "data scientist";
pub const USER_AGENT: &str = "job_scrape/0.1";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;
pub const REQUEST_PAUSE_MS: u64 = 250; // be polite

// Pagination: result offsets run 10, 25, 40, ...
pub const OFFSET_START: u32 = 10;
pub const OFFSET_STEP: u32 = 15;
pub const DEFAULT_MAX_OFFSET: u32 = 1050;

/// Search targets: (city, state, max offset). Charlotte has far fewer
/// postings than the others, so its offset range is capped lower.
pub const TARGETS: &[(&str, &str, u32)] = &[
    ("New York", "NY", DEFAULT_MAX_OFFSET),
    ("Charlotte", "NC", 105),
    ("San Francisco", "CA", DEFAULT_MAX_OFFSET),
    ("Boston", "MA", DEFAULT_MAX_OFFSET),
    ("Los Angeles", "CA", DEFAULT_MAX_OFFSET),
    ("Washington", "DC", DEFAULT_MAX_OFFSET),
];

// Annualization (40-hour week, 52-week year)
pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const HOURS_PER_WEEK: f64 = 40.0;

// Output
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_LISTINGS_FILE: &str = "listings.csv";
pub const COUNT_CHART_FILE: &str = "job_count_by_city.png";
pub const SALARY_CHART_FILE: &str = "avg_max_salary_by_city.png";
