//! Intake of user-supplied URL lists

/// Splits free-form text into a list of URL candidates
///
/// Each line is trimmed and blank lines are dropped. No validation happens
/// here; malformed entries surface later as per-URL errors.
pub fn parse_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Caps a batch at `max` entries
///
/// # Returns
///
/// The kept URLs (the first `max`, in input order) and the number dropped.
pub fn limit_batch(mut urls: Vec<String>, max: usize) -> (Vec<String>, usize) {
    let dropped = urls.len().saturating_sub(max);
    urls.truncate(max);
    (urls, dropped)
}
