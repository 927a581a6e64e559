//! Database schema definitions
//!
//! This module contains all SQL schema definitions for the Robots-Audit database.

/// SQL schema for the database
pub const SCHEMA_SQL: &str = r#"
-- One row per analyzed batch
CREATE TABLE IF NOT EXISTS analyses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    created_at TEXT NOT NULL,
    batch_name TEXT,
    config_hash TEXT NOT NULL
);

-- One row per input URL of a batch
CREATE TABLE IF NOT EXISTS analysis_results (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    analysis_id INTEGER NOT NULL REFERENCES analyses(id) ON DELETE CASCADE,
    url TEXT NOT NULL,
    robots_url TEXT,
    status TEXT NOT NULL,
    google_disallowed INTEGER NOT NULL DEFAULT 0,
    robots_content TEXT,
    error_message TEXT,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_results_analysis ON analysis_results(analysis_id);

-- Disallow rules of a result, kept in extraction order
CREATE TABLE IF NOT EXISTS disallow_rules (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    result_id INTEGER NOT NULL REFERENCES analysis_results(id) ON DELETE CASCADE,
    position INTEGER NOT NULL,
    agent TEXT NOT NULL,
    rule TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_rules_result ON disallow_rules(result_id);
"#;

/// Initializes the database schema
pub fn initialize_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
