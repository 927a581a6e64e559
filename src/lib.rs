//! Robots-Audit: Google crawler access checks for robots.txt
//!
//! This crate fetches the robots.txt file of each site in a batch of URLs and
//! reports whether Google's crawlers are disallowed, along with the specific
//! disallow rules that apply to them.

pub mod analyzer;
pub mod config;
pub mod output;
pub mod robots;
pub mod storage;
pub mod url;

use thiserror::Error;

pub use analyzer::FetchError;

/// Main error type for Robots-Audit operations
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("{0}")]
    Fetch(#[from] FetchError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Worker count must be at least 1, got {0}")]
    InvalidWorkerCount(usize),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Missing host in URL")]
    MissingHost,
}

/// Result type alias for Robots-Audit operations
pub type Result<T> = std::result::Result<T, AuditError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use analyzer::{AnalysisOutcome, AnalysisResult, AnalysisStatus, Analyzer, DisallowRule};
pub use config::Config;
pub use robots::GOOGLE_AGENTS;
pub use crate::url::{normalize_base_url, robots_txt_url};
