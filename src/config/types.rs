use crate::robots::default_google_agents;
use serde::Deserialize;

/// Main configuration structure for Robots-Audit
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Analysis behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Maximum number of concurrent analyses
    #[serde(rename = "max-workers")]
    pub max_workers: usize,

    /// Timeout for each robots.txt request (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Maximum number of URLs analyzed per batch
    #[serde(rename = "max-batch-size")]
    pub max_batch_size: usize,

    /// User-Agent header sent with each request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Google crawler names to report on
    #[serde(rename = "google-agents")]
    pub google_agents: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_workers: 25,
            timeout_secs: 15,
            max_batch_size: 200,
            user_agent: format!("robots-audit/{}", env!("CARGO_PKG_VERSION")),
            google_agents: default_google_agents(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the SQLite database holding saved analyses
    #[serde(rename = "database-path")]
    pub database_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            database_path: "./robots_audit.db".to_string(),
        }
    }
}
