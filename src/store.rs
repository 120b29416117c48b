// src/store.rs
//
// CSV hand-off between the two stages. Columns:
//   id, title, company, address, salary_text, summary
// Absent optionals round-trip as empty fields.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::specs::listings::Listing;

#[derive(Debug, Serialize, Deserialize)]
struct Row {
    id: usize,
    title: String,
    company: String,
    address: Option<String>,
    salary_text: Option<String>,
    summary: Option<String>,
}

pub fn save_listings(path: &Path, listings: &[Listing]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }

    let mut w = csv::Writer::from_path(path)?;
    for (id, l) in listings.iter().enumerate() {
        w.serialize(Row {
            id,
            title: l.title.clone(),
            company: l.company.clone(),
            address: l.address.clone(),
            salary_text: l.salary_text.clone(),
            summary: l.summary.clone(),
        })?;
    }
    w.flush().map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

pub fn load_listings(path: &Path) -> Result<Vec<Listing>> {
    let mut r = csv::Reader::from_path(path)?;
    let mut out = Vec::new();
    for rec in r.deserialize::<Row>() {
        let row = rec?;
        out.push(Listing {
            title: row.title,
            company: row.company,
            address: row.address,
            salary_text: row.salary_text,
            summary: row.summary,
        });
    }
    Ok(out)
}
