use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Whole-request timeout applied to every GET.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Non-success HTTP status; carries the status code into the failure line.
#[derive(Debug, Error)]
#[error("server returned {status}")]
pub struct HttpStatusError {
    pub status: StatusCode,
}

pub fn build_client() -> Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")
}

/// Issues a single blocking GET and returns the full response body.
/// Any non-success status is an error; nothing is written to disk here.
pub fn fetch_bytes(client: &Client, url: &str) -> Result<Vec<u8>> {
    log::info!("Requesting {}", url);

    let response = client
        .get(url)
        .send()
        .context("Request failed")?;

    let status = response.status();
    if !status.is_success() {
        return Err(HttpStatusError { status }.into());
    }

    let bytes = response
        .bytes()
        .context("Failed to read response body")?;

    log::info!("Received {} bytes from {}", bytes.len(), url);
    Ok(bytes.to_vec())
}
