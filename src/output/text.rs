//! Plain-text report export

use crate::analyzer::AnalysisResult;
use crate::output::csv::google_allowed_label;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Number of rules listed per site before summarizing the rest
const MAX_LISTED_RULES: usize = 10;

/// Formats results as a numbered plain-text report
///
/// # Arguments
///
/// * `results` - The results to report
/// * `generated_at` - Timestamp printed in the report header
pub fn format_text_report<Tz>(results: &[AnalysisResult], generated_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut lines = vec![
        format!(
            "Robots.txt Analysis Report - {}",
            generated_at.format("%Y-%m-%d %H:%M:%S")
        ),
        "=".repeat(80),
        String::new(),
    ];

    for (i, result) in results.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, result.url));
        lines.push(format!("   Status: {}", result.status().as_str()));
        lines.push(format!(
            "   Google Allowed: {}",
            google_allowed_label(result)
        ));

        if let Some(message) = result.error_message() {
            lines.push(format!("   Error: {}", message));
        }

        let rules = result.disallow_rules();
        if rules.is_empty() {
            lines.push("   No disallow rules for Google".to_string());
        } else {
            lines.push(format!("   Disallow Rules ({}):", rules.len()));
            for rule in rules.iter().take(MAX_LISTED_RULES) {
                lines.push(format!("     - {}: {}", rule.agent, rule.rule));
            }
            if rules.len() > MAX_LISTED_RULES {
                lines.push(format!(
                    "     ... and {} more rules",
                    rules.len() - MAX_LISTED_RULES
                ));
            }
        }

        lines.push(String::new());
    }

    lines.join("\n")
}
