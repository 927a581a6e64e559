//! Analyzer module for robots.txt checks
//!
//! This module contains the analysis pipeline for a single URL
//! (normalize, resolve, fetch, extract) and the batch orchestrator that runs
//! it for many URLs with bounded concurrency.

mod batch;
mod fetcher;
mod result;

pub use batch::run_batch;
pub use fetcher::{build_http_client, fetch_robots_txt, FetchError};
pub use result::{AnalysisOutcome, AnalysisResult, AnalysisStatus, RobotsReport};

pub use crate::robots::DisallowRule;

use crate::config::AnalyzerConfig;
use crate::robots::extract_google_rules;
use crate::url::{normalize_base_url, robots_txt_url};
use crate::AuditError;
use reqwest::Client;
use std::sync::Arc;

/// Runs robots.txt analyses
///
/// Holds the shared HTTP client and the Google agent list. Cloning is cheap;
/// clones share the client's connection pool.
#[derive(Debug, Clone)]
pub struct Analyzer {
    client: Client,
    agents: Arc<[String]>,
    timeout_secs: u64,
    max_workers: usize,
}

impl Analyzer {
    /// Creates a new analyzer from configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Analyzer)` - Ready to analyze
    /// * `Err(AuditError)` - The HTTP client could not be built
    pub fn new(config: &AnalyzerConfig) -> Result<Self, AuditError> {
        let client = build_http_client(config)?;

        Ok(Self {
            client,
            agents: config.google_agents.clone().into(),
            timeout_secs: config.timeout_secs,
            max_workers: config.max_workers,
        })
    }

    /// The configured worker pool size
    pub fn max_workers(&self) -> usize {
        self.max_workers
    }

    /// The Google agent names this analyzer reports on
    pub fn agents(&self) -> &[String] {
        &self.agents
    }

    /// Analyzes a single URL
    ///
    /// Never fails: malformed input and fetch failures become error results.
    pub async fn analyze(&self, url: &str) -> AnalysisResult {
        match self.try_analyze(url).await {
            Ok(report) => AnalysisResult::success(url, report),
            Err(e) => {
                tracing::error!("Error analyzing robots.txt for {}: {}", url, e);
                AnalysisResult::failure(url, failure_message(&e))
            }
        }
    }

    /// Analyzes a batch of URLs with the configured worker count
    pub async fn analyze_batch(&self, urls: &[String]) -> Result<Vec<AnalysisResult>, AuditError> {
        self.analyze_batch_with_workers(urls, self.max_workers).await
    }

    /// Analyzes a batch of URLs with an explicit worker count
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<AnalysisResult>)` - One result per input URL, in completion order
    /// * `Err(AuditError)` - `workers` was zero
    pub async fn analyze_batch_with_workers(
        &self,
        urls: &[String],
        workers: usize,
    ) -> Result<Vec<AnalysisResult>, AuditError> {
        run_batch(urls, workers, |url| {
            let analyzer = self.clone();
            async move { analyzer.analyze(&url).await }
        })
        .await
    }

    async fn try_analyze(&self, url: &str) -> Result<RobotsReport, AuditError> {
        let base_url = normalize_base_url(url)?;
        let robots_url = robots_txt_url(&base_url)?;

        tracing::debug!("Analyzing robots.txt for {}", base_url);
        tracing::debug!("Robots.txt URL: {}", robots_url);

        let robots_content = fetch_robots_txt(&self.client, &robots_url, self.timeout_secs).await?;
        let extraction = extract_google_rules(&robots_content, &base_url, &self.agents[..]);

        Ok(RobotsReport {
            robots_url,
            google_disallowed: extraction.google_disallowed,
            disallow_rules: extraction.disallow_rules,
            robots_content,
        })
    }
}

/// Analyzes a batch of URLs using default settings
///
/// Convenience entry point for callers without a configuration file.
pub async fn analyze_urls(
    urls: &[String],
    max_workers: usize,
) -> Result<Vec<AnalysisResult>, AuditError> {
    let analyzer = Analyzer::new(&AnalyzerConfig::default())?;
    analyzer.analyze_batch_with_workers(urls, max_workers).await
}

/// Maps a per-URL failure to the message stored on the result
fn failure_message(err: &AuditError) -> String {
    match err {
        AuditError::Fetch(fetch) => fetch.to_string(),
        AuditError::Url(url) => format!("Failed to analyze robots.txt: {}", url),
        other => format!("Failed to analyze robots.txt: {}", other),
    }
}
