// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("chart rendering failed: {0}")]
    Chart(String),
}

pub type Result<T> = std::result::Result<T, Error>;
