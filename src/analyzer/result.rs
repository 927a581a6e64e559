//! Per-URL analysis results

use crate::robots::DisallowRule;
use serde::{Deserialize, Serialize};

/// Status of a single analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisStatus {
    Success,
    Error,
}

impl AnalysisStatus {
    /// Converts the status to its stored/exported string form
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisStatus::Success => "success",
            AnalysisStatus::Error => "error",
        }
    }

    /// Parses a status from its stored string form
    pub fn from_db_string(s: &str) -> Option<Self> {
        match s {
            "success" => Some(AnalysisStatus::Success),
            "error" => Some(AnalysisStatus::Error),
            _ => None,
        }
    }
}

/// Data gathered from a successfully fetched robots.txt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotsReport {
    /// Fully-resolved robots.txt location
    pub robots_url: String,

    /// True if any Google agent is disallowed
    pub google_disallowed: bool,

    /// Significant rules for Google agents
    pub disallow_rules: Vec<DisallowRule>,

    /// Raw fetched text
    pub robots_content: String,
}

/// Outcome of analyzing one URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AnalysisOutcome {
    Success(RobotsReport),
    Error { error_message: String },
}

/// Result of analyzing one input URL
///
/// Built once per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The input string, exactly as supplied
    pub url: String,

    #[serde(flatten)]
    pub outcome: AnalysisOutcome,
}

impl AnalysisResult {
    /// Creates a successful result
    pub fn success(url: impl Into<String>, report: RobotsReport) -> Self {
        Self {
            url: url.into(),
            outcome: AnalysisOutcome::Success(report),
        }
    }

    /// Creates a failed result carrying a human-readable message
    pub fn failure(url: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            outcome: AnalysisOutcome::Error {
                error_message: error_message.into(),
            },
        }
    }

    pub fn status(&self) -> AnalysisStatus {
        match self.outcome {
            AnalysisOutcome::Success(_) => AnalysisStatus::Success,
            AnalysisOutcome::Error { .. } => AnalysisStatus::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status() == AnalysisStatus::Success
    }

    /// The success report, if any
    pub fn report(&self) -> Option<&RobotsReport> {
        match &self.outcome {
            AnalysisOutcome::Success(report) => Some(report),
            AnalysisOutcome::Error { .. } => None,
        }
    }

    /// False for failed analyses
    pub fn google_disallowed(&self) -> bool {
        self.report().map_or(false, |r| r.google_disallowed)
    }

    /// Empty for failed analyses
    pub fn disallow_rules(&self) -> &[DisallowRule] {
        match self.report() {
            Some(report) => &report.disallow_rules,
            None => &[],
        }
    }

    pub fn robots_url(&self) -> Option<&str> {
        self.report().map(|r| r.robots_url.as_str())
    }

    pub fn robots_content(&self) -> Option<&str> {
        self.report().map(|r| r.robots_content.as_str())
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.outcome {
            AnalysisOutcome::Success(_) => None,
            AnalysisOutcome::Error { error_message } => Some(error_message),
        }
    }
}
