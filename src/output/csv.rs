//! CSV export

use crate::analyzer::AnalysisResult;

const HEADER: [&str; 7] = [
    "URL",
    "Status",
    "Google Allowed",
    "Disallow Rules Count",
    "Robots.txt URL",
    "Error Message",
    "Top Disallow Rules",
];

/// Number of rules listed in the "Top Disallow Rules" column
const TOP_RULES: usize = 3;

/// Formats results as CSV with CRLF line endings
pub fn format_csv(results: &[AnalysisResult]) -> String {
    let mut out = String::new();
    push_row(&mut out, HEADER.iter().copied());

    for result in results {
        let rules = result.disallow_rules();
        let count = rules.len().to_string();
        let top = top_rules(result);

        push_row(
            &mut out,
            [
                result.url.as_str(),
                result.status().as_str(),
                google_allowed_label(result),
                count.as_str(),
                result.robots_url().unwrap_or(""),
                result.error_message().unwrap_or(""),
                top.as_str(),
            ],
        );
    }

    out
}

/// "No" when Google is disallowed, "Yes" otherwise
pub(crate) fn google_allowed_label(result: &AnalysisResult) -> &'static str {
    if result.google_disallowed() {
        "No"
    } else {
        "Yes"
    }
}

fn top_rules(result: &AnalysisResult) -> String {
    let rules = result.disallow_rules();
    let mut top = rules
        .iter()
        .take(TOP_RULES)
        .map(|r| format!("{}: {}", r.agent, r.rule))
        .collect::<Vec<_>>()
        .join("; ");

    if rules.len() > TOP_RULES {
        top.push_str(&format!("; ... and {} more", rules.len() - TOP_RULES));
    }

    top
}

fn push_row<'a>(out: &mut String, fields: impl IntoIterator<Item = &'a str>) {
    let row = fields.into_iter().map(escape).collect::<Vec<_>>().join(",");
    out.push_str(&row);
    out.push_str("\r\n");
}

/// Quotes a field when it holds a delimiter, quote or line break
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
