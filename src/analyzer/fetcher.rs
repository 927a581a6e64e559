//! HTTP fetcher implementation
//!
//! This module handles the single outbound request made per analysis:
//! - Building the shared HTTP client with the configured user agent and timeout
//! - GET requests for robots.txt files
//! - Error classification (timeouts are reported separately)

use crate::config::AnalyzerConfig;
use reqwest::Client;
use std::error::Error as StdError;
use std::time::Duration;
use thiserror::Error;

/// Failure to retrieve a robots.txt file
///
/// The `Display` output is the message shown to users.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Connection timed out ({secs}s limit). Site may be slow or unresponsive.")]
    Timeout { secs: u64 },

    #[error("Failed to fetch robots.txt: {}", describe(.0))]
    Request(reqwest::Error),
}

/// Builds an HTTP client with proper configuration
///
/// The client is cheap to clone and shared by all analysis tasks. Redirects
/// follow reqwest's default policy.
///
/// # Arguments
///
/// * `config` - The analyzer configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &AnalyzerConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches the raw text of a robots.txt file
///
/// Issues one GET request, without retries. Any non-2xx status and any
/// network-level failure is a [`FetchError`].
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `robots_url` - The robots.txt URL
/// * `timeout_secs` - The client's timeout, used in the timeout message
pub async fn fetch_robots_txt(
    client: &Client,
    robots_url: &str,
    timeout_secs: u64,
) -> Result<String, FetchError> {
    let classify = |e: reqwest::Error| {
        if e.is_timeout() {
            FetchError::Timeout { secs: timeout_secs }
        } else {
            FetchError::Request(e)
        }
    };

    let response = client.get(robots_url).send().await.map_err(classify)?;
    let response = response.error_for_status().map_err(classify)?;
    response.text().await.map_err(classify)
}

/// Formats an error together with its source chain
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
