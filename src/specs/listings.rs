// src/specs/listings.rs
//! Page *spec* for job-search result pages.
//!
//! Knows how to read one results document and produce raw listing rows.
//! It does not fetch, paginate, or persist anything; see `scrape` for
//! the driving loop and `store` for CSV I/O.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::core::sanitize::{non_empty, normalize_ws};

/// One scraped job-posting row, before any cleaning.
/// Optional fields are simply absent on many cards; that never fails the row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing {
    pub title: String,
    pub company: String,
    pub address: Option<String>,
    pub salary_text: Option<String>,
    pub summary: Option<String>,
}

struct Selectors {
    card: Selector,
    title: Selector,
    company: Selector,
    address: Selector,
    salary: Selector,
    summary: Selector,
}

impl Selectors {
    fn new() -> Self {
        // Static selector strings; parse failures are programmer errors.
        let sel = |s: &str| Selector::parse(s).expect("static selector");
        Self {
            card: sel("div.jobsearch-SerpJobCard"),
            title: sel("div.title a"),
            company: sel("div.sjcl span"),
            address: sel("div.location"),
            salary: sel("span.salaryText"),
            summary: sel("div.summary"),
        }
    }
}

// Selectors are static; parse them once, not per page.
static SELECTORS: LazyLock<Selectors> = LazyLock::new(Selectors::new);

/// Extract every result card on the page.
/// Cards with no title or company are malformed and skipped.
pub fn parse_doc(doc: &str) -> Vec<Listing> {
    let html = Html::parse_document(doc);
    let sels = &*SELECTORS;

    let mut out = Vec::new();
    for card in html.select(&sels.card) {
        match parse_card(&card, sels) {
            Some(listing) => out.push(listing),
            None => debug!("skipping result card without title/company"),
        }
    }
    out
}

fn parse_card(card: &ElementRef, sels: &Selectors) -> Option<Listing> {
    let title = required_text(card, &sels.title)?;
    let company = required_text(card, &sels.company)?;
    Some(Listing {
        title,
        company,
        address: optional_text(card, &sels.address),
        salary_text: optional_text(card, &sels.salary),
        summary: optional_text(card, &sels.summary),
    })
}

fn required_text(card: &ElementRef, sel: &Selector) -> Option<String> {
    let el = card.select(sel).next()?;
    let txt = normalize_ws(&el.text().collect::<String>());
    if txt.is_empty() {
        None
    } else {
        Some(txt)
    }
}

fn optional_text(card: &ElementRef, sel: &Selector) -> Option<String> {
    card.select(sel)
        .next()
        .and_then(|el| non_empty(&el.text().collect::<String>()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
        <div class="jobsearch-SerpJobCard">
            <div class="title"><a href="/rc/clk?jk=1">Data  Scientist</a></div>
            <div class="sjcl"><span class="company">Acme Corp</span></div>
            <div class="location accessible-contrast-color-location">Boston, MA</div>
            <span class="salaryText">
                $80,000 a year
            </span>
            <div class="summary">Build models.</div>
        </div>
        <div class="jobsearch-SerpJobCard">
            <div class="title"><a href="/rc/clk?jk=2">ML Engineer</a></div>
            <div class="sjcl"><span class="company">Widgets Inc</span></div>
        </div>
        <div class="jobsearch-SerpJobCard">
            <div class="sjcl"><span class="company">No Title LLC</span></div>
        </div>
        </body></html>
    "#;

    #[test]
    fn extracts_all_fields() {
        let rows = parse_doc(PAGE);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "Data Scientist");
        assert_eq!(rows[0].company, "Acme Corp");
        assert_eq!(rows[0].address.as_deref(), Some("Boston, MA"));
        assert_eq!(rows[0].salary_text.as_deref(), Some("$80,000 a year"));
        assert_eq!(rows[0].summary.as_deref(), Some("Build models."));
    }

    #[test]
    fn missing_optionals_are_absent_not_fatal() {
        let rows = parse_doc(PAGE);
        let row = &rows[1];
        assert_eq!(row.title, "ML Engineer");
        assert_eq!(row.address, None);
        assert_eq!(row.salary_text, None);
        assert_eq!(row.summary, None);
    }

    #[test]
    fn card_without_title_is_skipped() {
        let rows = parse_doc(PAGE);
        assert!(rows.iter().all(|r| r.company != "No Title LLC"));
    }

    #[test]
    fn empty_page_yields_no_rows() {
        assert!(parse_doc("<html><body></body></html>").is_empty());
    }
}
