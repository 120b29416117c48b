// src/core/net.rs
//
// Blocking HTTP over one client per run, short timeout, no retries:
// a failed page is the caller's problem (it skips and moves on).

use std::time::Duration;

use reqwest::blocking::{Client, Request};

use crate::config::consts::{BASE_URL, REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

pub fn client() -> Result<Client> {
    let c = Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(c)
}

/// Build one search-page request. Parameter values go through the query
/// builder, which percent-encodes them; a query like "C# developer" or a
/// location comma must not leak into the URL structure.
pub fn search_request(
    client: &Client,
    query: &str,
    location: &str,
    offset: u32,
) -> Result<Request> {
    let start = offset.to_string();
    let req = client
        .get(format!("{}/jobs", BASE_URL))
        .query(&[("q", query), ("l", location), ("start", start.as_str())])
        .build()?;
    Ok(req)
}

/// Fetch one search-results page and return the body as text.
/// Non-2xx statuses are errors; redirects are followed by the client.
pub fn search_page(client: &Client, query: &str, location: &str, offset: u32) -> Result<String> {
    let req = search_request(client, query, location, offset)?;
    let url = req.url().to_string();
    let resp = client.execute(req)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(Error::HttpStatus {
            status: status.as_u16(),
            url,
        });
    }
    Ok(resp.text()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_template_matches_endpoint() {
        let c = client().unwrap();
        let req = search_request(&c, "data scientist", "New York, NY", 10).unwrap();
        assert_eq!(
            req.url().as_str(),
            "https://www.indeed.com/jobs?q=data+scientist&l=New+York%2C+NY&start=10"
        );
    }

    #[test]
    fn reserved_characters_in_query_are_encoded() {
        let c = client().unwrap();

        // '#' must not start a fragment and drop the trailing parameters.
        let req = search_request(&c, "C# developer", "Boston, MA", 25).unwrap();
        assert_eq!(
            req.url().as_str(),
            "https://www.indeed.com/jobs?q=C%23+developer&l=Boston%2C+MA&start=25"
        );
        assert!(req.url().fragment().is_none());

        // '&' must not inject an extra parameter.
        let req = search_request(&c, "R&D scientist", "Boston, MA", 10).unwrap();
        assert_eq!(
            req.url().as_str(),
            "https://www.indeed.com/jobs?q=R%26D+scientist&l=Boston%2C+MA&start=10"
        );
    }
}
