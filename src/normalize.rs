// src/normalize.rs
//
// Normalizer stage: dedup raw listings, derive city / salary period /
// maximum salary from free text, and annualize. Every dropped record is
// counted by reason instead of vanishing silently.

use std::collections::HashSet;

use tracing::warn;

use crate::config::consts::{HOURS_PER_WEEK, MONTHS_PER_YEAR, WEEKS_PER_YEAR};
use crate::specs::listings::Listing;

/// Salary periods we can annualize. Anything else on a listing
/// (e.g. "class" on training-course ads) is unclassifiable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Period {
    Year,
    Month,
    Week,
    Hour,
}

impl Period {
    fn annual_factor(self) -> f64 {
        match self {
            Period::Year => 1.0,
            Period::Month => MONTHS_PER_YEAR,
            Period::Week => WEEKS_PER_YEAR,
            Period::Hour => HOURS_PER_WEEK * WEEKS_PER_YEAR,
        }
    }
}

/// A listing after cleaning. `annual_max_salary` is always the
/// 12-month equivalent of the listing's maximum advertised figure.
#[derive(Clone, Debug, PartialEq)]
pub struct CleanRecord {
    pub title: String,
    pub company: String,
    pub city: String,
    pub period: Period,
    pub annual_max_salary: f64,
}

/// Drop counters, one per reason.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CleanStats {
    pub input: usize,
    pub missing_salary: usize,
    pub duplicates: usize,
    pub unresolvable_city: usize,
    pub unclassifiable_period: usize,
    pub malformed_salary: usize,
    pub kept: usize,
}

/// Run the full normalization pass over raw listings.
pub fn clean(listings: &[Listing]) -> (Vec<CleanRecord>, CleanStats) {
    let mut stats = CleanStats {
        input: listings.len(),
        ..CleanStats::default()
    };

    let mut seen: HashSet<(&str, &str, Option<&str>, Option<&str>)> = HashSet::new();
    let mut out = Vec::new();

    for l in listings {
        let salary_text = match l.salary_text.as_deref() {
            Some(s) => s,
            None => {
                stats.missing_salary += 1;
                continue;
            }
        };

        // Exact-match dedup on (title, company, address, salary_text).
        let key = (
            l.title.as_str(),
            l.company.as_str(),
            l.address.as_deref(),
            l.salary_text.as_deref(),
        );
        if !seen.insert(key) {
            stats.duplicates += 1;
            continue;
        }

        let city = match derive_city(l.address.as_deref()) {
            Some(c) => c,
            None => {
                stats.unresolvable_city += 1;
                continue;
            }
        };

        let period = match parse_period(salary_text) {
            Some(p) => p,
            None => {
                stats.unclassifiable_period += 1;
                continue;
            }
        };

        let max = match parse_max_salary(salary_text) {
            Some(v) => v,
            None => {
                warn!(salary = salary_text, "malformed salary text, dropping");
                stats.malformed_salary += 1;
                continue;
            }
        };

        out.push(CleanRecord {
            title: l.title.clone(),
            company: l.company.clone(),
            city,
            period,
            annual_max_salary: max * period.annual_factor(),
        });
    }

    stats.kept = out.len();
    (out, stats)
}

/// City is the address up to the first comma. Absent addresses and the
/// literal absent-marker "nan" (from upstream tabular tooling) are
/// unresolvable.
fn derive_city(address: Option<&str>) -> Option<String> {
    let addr = address?;
    let city = addr.split(',').next().unwrap_or("").trim();
    if city.is_empty() || city.eq_ignore_ascii_case("nan") {
        return None;
    }
    Some(city.to_string())
}

/// The period is the last whitespace-delimited token of the salary text,
/// e.g. "$80,000 - $100,000 a year" -> Year.
fn parse_period(salary_text: &str) -> Option<Period> {
    match salary_text.split_whitespace().last()? {
        "year" => Some(Period::Year),
        "month" => Some(Period::Month),
        "week" => Some(Period::Week),
        "hour" => Some(Period::Hour),
        _ => None,
    }
}

/// The figure is the token right after the first '$', with thousands
/// separators stripped. For ranges ("$60,000 - $80,000 a year") that is
/// the leading figure.
fn parse_max_salary(salary_text: &str) -> Option<f64> {
    let (_, after) = salary_text.split_once('$')?;
    let token = after.split_whitespace().next()?;
    token.replace(',', "").parse::<f64>().ok()
}
