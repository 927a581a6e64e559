//! Storage traits and error types
//!
//! This module defines the trait interface for storage backends and
//! associated error types.

use crate::analyzer::AnalysisResult;
use crate::storage::AnalysisRecord;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Analysis not found: {0}")]
    AnalysisNotFound(i64),

    #[error("Corrupt record: {0}")]
    CorruptRecord(String),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for storage backend implementations
///
/// Results are stored under the analysis (batch) that produced them.
pub trait Storage {
    /// Creates a new analysis record
    ///
    /// # Arguments
    ///
    /// * `batch_name` - Optional label chosen by the user
    /// * `config_hash` - Hash of the configuration used for the batch
    ///
    /// # Returns
    ///
    /// The ID of the newly created analysis
    fn create_analysis(&mut self, batch_name: Option<&str>, config_hash: &str)
        -> StorageResult<i64>;

    /// Gets an analysis by ID
    fn get_analysis(&self, analysis_id: i64) -> StorageResult<AnalysisRecord>;

    /// Lists the most recent analyses, newest first
    fn list_analyses(&self, limit: usize) -> StorageResult<Vec<AnalysisRecord>>;

    /// Saves results (and their disallow rules) under an analysis
    ///
    /// All results are written in one transaction. Rule order is preserved.
    fn save_results(&mut self, analysis_id: i64, results: &[AnalysisResult]) -> StorageResult<()>;

    /// Loads the results of an analysis in the order they were saved
    fn load_results(&self, analysis_id: i64) -> StorageResult<Vec<AnalysisResult>>;

    /// Deletes an analysis with all of its results and rules
    fn delete_analysis(&mut self, analysis_id: i64) -> StorageResult<()>;
}
