//! JSON export

use crate::analyzer::AnalysisResult;
use crate::output::OutputResult;
use crate::robots::DisallowRule;
use serde::Serialize;

/// Flat export shape: every field present for every result
#[derive(Debug, Serialize)]
struct ExportRecord<'a> {
    url: &'a str,
    robots_url: Option<&'a str>,
    status: &'static str,
    google_disallowed: bool,
    robots_content: Option<&'a str>,
    error_message: Option<&'a str>,
    disallow_rules: &'a [DisallowRule],
}

impl<'a> From<&'a AnalysisResult> for ExportRecord<'a> {
    fn from(result: &'a AnalysisResult) -> Self {
        Self {
            url: &result.url,
            robots_url: result.robots_url(),
            status: result.status().as_str(),
            google_disallowed: result.google_disallowed(),
            robots_content: result.robots_content(),
            error_message: result.error_message(),
            disallow_rules: result.disallow_rules(),
        }
    }
}

/// Formats results as a pretty-printed JSON array
pub fn format_json(results: &[AnalysisResult]) -> OutputResult<String> {
    let records: Vec<ExportRecord<'_>> = results.iter().map(ExportRecord::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}
