//! Output module for exporting analysis results
//!
//! This module handles:
//! - Exporting results as JSON, CSV or a plain-text report
//! - Naming and writing export files
//! - Summarizing a batch with statistics

mod csv;
mod json;
pub mod stats;
mod text;

pub use self::csv::format_csv;
pub use json::format_json;
pub use stats::{print_statistics, BatchStatistics};
pub use text::format_text_report;

use crate::analyzer::AnalysisResult;
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Unknown export format: {0}")]
    UnknownFormat(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Text,
}

impl ExportFormat {
    /// File extension used for exported files
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Text => "txt",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "txt" | "text" => Ok(ExportFormat::Text),
            other => Err(OutputError::UnknownFormat(other.to_string())),
        }
    }
}

/// Renders results in the given format
pub fn export_results(results: &[AnalysisResult], format: ExportFormat) -> OutputResult<String> {
    export_results_at(results, format, &Local::now())
}

/// Renders results in the given format, stamping reports with `now`
pub fn export_results_at<Tz>(
    results: &[AnalysisResult],
    format: ExportFormat,
    now: &DateTime<Tz>,
) -> OutputResult<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match format {
        ExportFormat::Json => format_json(results),
        ExportFormat::Csv => Ok(format_csv(results)),
        ExportFormat::Text => Ok(format_text_report(results, now)),
    }
}

/// Builds the default export file name, e.g. `robots_analysis_20240309_140500.csv`
pub fn default_export_filename<Tz>(format: ExportFormat, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "robots_analysis_{}.{}",
        now.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Writes an export to disk
///
/// If `path` is an existing directory, the file is created inside it under
/// the default export name.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The path written
/// * `Err(OutputError)` - Failed to render or write
pub fn write_export(
    results: &[AnalysisResult],
    format: ExportFormat,
    path: &Path,
) -> OutputResult<PathBuf> {
    let now = Local::now();
    let contents = export_results_at(results, format, &now)?;

    let target = if path.is_dir() {
        path.join(default_export_filename(format, &now))
    } else {
        path.to_path_buf()
    };

    std::fs::write(&target, contents)?;
    Ok(target)
}
