//! HTTP access to the job data source.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: a stub returning a transport failure, since there is no
//! browser to fetch from.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (transport, HTTP status, body decode) is a
//! `DataLoadFailure`; callers decide how to surface it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Job;
use crate::error::DataLoadFailure;

/// Fetch and decode the job list at `url`.
///
/// # Errors
///
/// Returns `DataLoadFailure` if the request fails, the status is not a
/// success, or the body is not a JSON array of jobs.
pub async fn fetch_jobs(url: &str) -> Result<Vec<Job>, DataLoadFailure> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| DataLoadFailure::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(DataLoadFailure::Status { status: resp.status() });
        }
        let body = resp.text().await.map_err(|e| DataLoadFailure::Transport(e.to_string()))?;
        parse_jobs(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(DataLoadFailure::Transport("not available outside the browser".to_owned()))
    }
}

/// Decode a response body into jobs, preserving source order.
///
/// # Errors
///
/// Returns `DataLoadFailure::Malformed` if the body is not a JSON array of
/// job records.
pub fn parse_jobs(body: &str) -> Result<Vec<Job>, DataLoadFailure> {
    Ok(serde_json::from_str(body)?)
}
