// tests/pipeline_e2e.rs

use std::fs;
use std::path::PathBuf;

use job_scrape::normalize;
use job_scrape::report;
use job_scrape::specs::listings::Listing;
use job_scrape::store;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("job_scrape_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn listing(
    title: &str,
    company: &str,
    address: Option<&str>,
    salary: Option<&str>,
    summary: &str,
) -> Listing {
    Listing {
        title: title.to_string(),
        company: company.to_string(),
        address: address.map(str::to_string),
        salary_text: salary.map(str::to_string),
        summary: Some(summary.to_string()),
    }
}

#[test]
fn scraped_rows_through_csv_clean_and_aggregate() {
    let dir = tmp_dir("full");
    let csv_path = dir.join("listings.csv");

    let rows = vec![
        listing("A", "X", Some("Boston, MA"), Some("$80,000 a year"), "s1"),
        listing("A", "X", Some("Boston, MA"), Some("$80,000 a year"), "s1"),
        listing("B", "Y", None, Some("$40 an hour"), "s2"),
    ];

    store::save_listings(&csv_path, &rows).unwrap();
    let loaded = store::load_listings(&csv_path).unwrap();
    assert_eq!(loaded, rows);

    let (records, stats) = normalize::clean(&loaded);

    // The duplicate Boston row and the addressless row both drop.
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].city, "Boston");
    assert_eq!(records[0].annual_max_salary, 80_000.0);
    assert_eq!(stats.duplicates, 1);
    assert_eq!(stats.unresolvable_city, 1);

    let reports = report::aggregate(&records);
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].city, "Boston");
    assert_eq!(reports[0].postings, 1);
    assert_eq!(reports[0].mean_max_salary, 80_000.0);
}

#[test]
fn absent_optionals_survive_the_csv_boundary() {
    // The cleaner keys decisions off `None`; an absent field written to
    // CSV must come back absent, not as an empty string.
    let dir = tmp_dir("optionals");
    let csv_path = dir.join("listings.csv");

    let rows = vec![listing("T", "C", None, None, "s")];
    store::save_listings(&csv_path, &rows).unwrap();

    let loaded = store::load_listings(&csv_path).unwrap();
    assert_eq!(loaded[0].address, None);
    assert_eq!(loaded[0].salary_text, None);
}

#[test]
fn training_ads_and_odd_periods_never_reach_the_report() {
    let rows = vec![
        listing("Bootcamp", "EduCo", Some("Boston, MA"), Some("$500 a class"), "s"),
        listing("Temp", "Agency", Some("Boston, MA"), Some("$200 a day"), "s"),
        listing("DS", "Acme", Some("Boston, MA"), Some("$90,000 a year"), "s"),
    ];
    let (records, stats) = normalize::clean(&rows);
    assert_eq!(records.len(), 1);
    assert_eq!(stats.unclassifiable_period, 2);

    let reports = report::aggregate(&records);
    assert_eq!(reports[0].postings, 1);
}
