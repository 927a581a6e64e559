//! Storage module for persisting analyses
//!
//! This module handles all database operations, including:
//! - SQLite database initialization and schema management
//! - Saving batch results keyed by their owning analysis
//! - Listing, reloading and deleting past analyses

mod schema;
mod sqlite;
mod traits;

pub use sqlite::SqliteStorage;
pub use traits::{Storage, StorageError, StorageResult};

/// Represents a saved analysis (one batch)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRecord {
    pub id: i64,
    pub created_at: String,
    pub batch_name: Option<String>,
    pub config_hash: String,
    pub result_count: u64,
}
