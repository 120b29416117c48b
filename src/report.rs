// src/report.rs
//
// Reporter stage: aggregate cleaned records per city and render the two
// bar charts (postings count, mean annual max salary).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tracing::warn;

use crate::config::consts::{COUNT_CHART_FILE, SALARY_CHART_FILE};
use crate::error::{Error, Result};
use crate::normalize::CleanRecord;

/// Per-city aggregation of the cleaned record set.
#[derive(Clone, Debug, PartialEq)]
pub struct CityReport {
    pub city: String,
    pub postings: u32,
    pub mean_max_salary: f64,
}

/// Group by city; count postings and average the annualized figures.
/// Output is sorted by city name so runs are deterministic.
pub fn aggregate(records: &[CleanRecord]) -> Vec<CityReport> {
    let mut acc: BTreeMap<&str, (u32, f64)> = BTreeMap::new();
    for r in records {
        let e = acc.entry(r.city.as_str()).or_insert((0, 0.0));
        e.0 += 1;
        e.1 += r.annual_max_salary;
    }
    acc.into_iter()
        .map(|(city, (n, sum))| CityReport {
            city: city.to_string(),
            postings: n,
            mean_max_salary: sum / n as f64,
        })
        .collect()
}

/// Render both charts into `out_dir`. Returns the paths written.
pub fn render_charts(reports: &[CityReport], out_dir: &Path) -> Result<Vec<PathBuf>> {
    if reports.is_empty() {
        warn!("no records survived cleaning; skipping charts");
        return Ok(Vec::new());
    }

    fs::create_dir_all(out_dir).map_err(|e| Error::Io {
        path: out_dir.to_path_buf(),
        source: e,
    })?;

    let labels: Vec<String> = reports.iter().map(|r| r.city.clone()).collect();

    let count_path = out_dir.join(COUNT_CHART_FILE);
    let counts: Vec<f64> = reports.iter().map(|r| f64::from(r.postings)).collect();
    bar_chart(
        &count_path,
        "Job postings by city",
        "Postings",
        &labels,
        &counts,
    )?;

    let salary_path = out_dir.join(SALARY_CHART_FILE);
    let means: Vec<f64> = reports.iter().map(|r| r.mean_max_salary).collect();
    bar_chart(
        &salary_path,
        "Mean annual max salary by city",
        "Salary (USD/year)",
        &labels,
        &means,
    )?;

    Ok(vec![count_path, salary_path])
}

fn bar_chart(
    path: &Path,
    caption: &str,
    y_desc: &str,
    labels: &[String],
    values: &[f64],
) -> Result<()> {
    let root = BitMapBackend::new(path, (960, 720)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let y_max = values.iter().cloned().fold(0.0, f64::max).max(1.0) * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(90)
        .build_cartesian_2d((0..labels.len()).into_segmented(), 0f64..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len())
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) if *i < labels.len() => labels[*i].clone(),
            _ => String::new(),
        })
        .y_desc(y_desc)
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.mix(0.6).filled())
                .margin(8)
                .data(values.iter().enumerate().map(|(i, v)| (i, *v))),
        )
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}

fn chart_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Chart(e.to_string())
}
