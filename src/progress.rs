// src/progress.rs

/// Lightweight progress reporting for the long-running scrape stage.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of cities to walk.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one page has been fetched and parsed.
    fn page_done(&mut self, _city: &str, _offset: u32, _rows: usize) {}

    /// Called when one city's pagination is exhausted.
    fn city_done(&mut self, _city: &str, _total_rows: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
