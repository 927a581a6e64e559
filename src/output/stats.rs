//! Statistics for a batch of analysis results
//!
//! This module summarizes a result collection for display after a batch
//! completes or when re-reading a saved analysis.

use crate::analyzer::AnalysisResult;

/// Batch statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchStatistics {
    /// Number of URLs analyzed
    pub total: usize,

    /// Analyses whose robots.txt was fetched
    pub succeeded: usize,

    /// Analyses that ended in an error
    pub failed: usize,

    /// Sites where at least one Google agent is disallowed
    pub google_disallowed: usize,

    /// Disallow rules extracted across all sites
    pub total_rules: usize,
}

impl BatchStatistics {
    /// Computes statistics from a result collection
    pub fn from_results(results: &[AnalysisResult]) -> Self {
        let mut stats = Self {
            total: results.len(),
            ..Self::default()
        };

        for result in results {
            if result.is_success() {
                stats.succeeded += 1;
            } else {
                stats.failed += 1;
            }
            if result.google_disallowed() {
                stats.google_disallowed += 1;
            }
            stats.total_rules += result.disallow_rules().len();
        }

        stats
    }

    /// Returns the success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.succeeded as f64 / self.total as f64) * 100.0
    }
}

/// Prints statistics to stderr in a formatted manner
///
/// Stderr keeps stdout free for exported results.
pub fn print_statistics(stats: &BatchStatistics) {
    eprintln!("=== Analysis Statistics ===\n");
    eprintln!("  URLs analyzed: {}", stats.total);
    eprintln!("  Fetched: {}", stats.succeeded);
    eprintln!("  Errors: {}", stats.failed);
    eprintln!("  Google disallowed: {}", stats.google_disallowed);
    eprintln!("  Disallow rules found: {}", stats.total_rules);
    eprintln!(
        "\nSuccess Rate: {:.1}% ({} / {} URLs fetched)",
        stats.success_rate(),
        stats.succeeded,
        stats.total
    );
}
