//! SQLite storage implementation
//!
//! This module provides a SQLite-based implementation of the Storage trait.

use crate::analyzer::{AnalysisResult, AnalysisStatus, RobotsReport};
use crate::robots::DisallowRule;
use crate::storage::schema::initialize_schema;
use crate::storage::traits::{Storage, StorageError, StorageResult};
use crate::storage::AnalysisRecord;
use crate::AuditError;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

const ANALYSIS_COLUMNS: &str = "a.id, a.created_at, a.batch_name, a.config_hash,
     (SELECT COUNT(*) FROM analysis_results r WHERE r.analysis_id = a.id)";

/// SQLite storage backend
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Creates a new SqliteStorage instance
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteStorage)` - Successfully opened/created database
    /// * `Err(AuditError)` - Failed to open database
    pub fn new(path: &Path) -> Result<Self, AuditError> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA foreign_keys = ON;
        ",
        )?;

        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory database (for testing)
    #[cfg(test)]
    pub fn new_in_memory() -> Result<Self, AuditError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    fn load_rules(&self, result_id: i64) -> StorageResult<Vec<DisallowRule>> {
        let mut stmt = self.conn.prepare(
            "SELECT agent, rule FROM disallow_rules WHERE result_id = ?1 ORDER BY position",
        )?;

        let rules = stmt
            .query_map(params![result_id], |row| {
                Ok(DisallowRule {
                    agent: row.get(0)?,
                    rule: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rules)
    }
}

fn analysis_from_row(row: &Row<'_>) -> rusqlite::Result<AnalysisRecord> {
    Ok(AnalysisRecord {
        id: row.get(0)?,
        created_at: row.get(1)?,
        batch_name: row.get(2)?,
        config_hash: row.get(3)?,
        result_count: row.get::<_, i64>(4)? as u64,
    })
}

/// Columns of one stored result, before its rules are attached
struct StoredResult {
    id: i64,
    url: String,
    robots_url: Option<String>,
    status: String,
    google_disallowed: bool,
    robots_content: Option<String>,
    error_message: Option<String>,
}

impl StoredResult {
    fn into_result(self, rules: Vec<DisallowRule>) -> StorageResult<AnalysisResult> {
        let status = AnalysisStatus::from_db_string(&self.status).ok_or_else(|| {
            StorageError::CorruptRecord(format!(
                "result {} has unknown status '{}'",
                self.id, self.status
            ))
        })?;

        Ok(match status {
            AnalysisStatus::Success => AnalysisResult::success(
                self.url,
                RobotsReport {
                    robots_url: self.robots_url.unwrap_or_default(),
                    google_disallowed: self.google_disallowed,
                    disallow_rules: rules,
                    robots_content: self.robots_content.unwrap_or_default(),
                },
            ),
            AnalysisStatus::Error => {
                AnalysisResult::failure(self.url, self.error_message.unwrap_or_default())
            }
        })
    }
}

impl Storage for SqliteStorage {
    fn create_analysis(
        &mut self,
        batch_name: Option<&str>,
        config_hash: &str,
    ) -> StorageResult<i64> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO analyses (created_at, batch_name, config_hash) VALUES (?1, ?2, ?3)",
            params![now, batch_name, config_hash],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn get_analysis(&self, analysis_id: i64) -> StorageResult<AnalysisRecord> {
        let sql = format!("SELECT {} FROM analyses a WHERE a.id = ?1", ANALYSIS_COLUMNS);

        self.conn
            .query_row(&sql, params![analysis_id], analysis_from_row)
            .optional()?
            .ok_or(StorageError::AnalysisNotFound(analysis_id))
    }

    fn list_analyses(&self, limit: usize) -> StorageResult<Vec<AnalysisRecord>> {
        let sql = format!(
            "SELECT {} FROM analyses a ORDER BY a.id DESC LIMIT ?1",
            ANALYSIS_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;

        let records = stmt
            .query_map(params![limit as i64], analysis_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    fn save_results(&mut self, analysis_id: i64, results: &[AnalysisResult]) -> StorageResult<()> {
        // Fail early instead of on the foreign key
        self.get_analysis(analysis_id)?;

        let now = Utc::now().to_rfc3339();
        let tx = self.conn.transaction()?;
        {
            let mut insert_result = tx.prepare(
                "INSERT INTO analysis_results (analysis_id, url, robots_url, status,
                 google_disallowed, robots_content, error_message, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            let mut insert_rule = tx.prepare(
                "INSERT INTO disallow_rules (result_id, position, agent, rule)
                 VALUES (?1, ?2, ?3, ?4)",
            )?;

            for result in results {
                insert_result.execute(params![
                    analysis_id,
                    result.url,
                    result.robots_url(),
                    result.status().as_str(),
                    result.google_disallowed(),
                    result.robots_content(),
                    result.error_message(),
                    now,
                ])?;
                let result_id = tx.last_insert_rowid();

                for (position, rule) in result.disallow_rules().iter().enumerate() {
                    insert_rule.execute(params![result_id, position as i64, rule.agent, rule.rule])?;
                }
            }
        }
        tx.commit()?;

        tracing::debug!("Saved {} results to analysis {}", results.len(), analysis_id);
        Ok(())
    }

    fn load_results(&self, analysis_id: i64) -> StorageResult<Vec<AnalysisResult>> {
        self.get_analysis(analysis_id)?;

        let mut stmt = self.conn.prepare(
            "SELECT id, url, robots_url, status, google_disallowed, robots_content, error_message
             FROM analysis_results WHERE analysis_id = ?1 ORDER BY id",
        )?;

        let stored = stmt
            .query_map(params![analysis_id], |row| {
                Ok(StoredResult {
                    id: row.get(0)?,
                    url: row.get(1)?,
                    robots_url: row.get(2)?,
                    status: row.get(3)?,
                    google_disallowed: row.get(4)?,
                    robots_content: row.get(5)?,
                    error_message: row.get(6)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        stored
            .into_iter()
            .map(|row| {
                let rules = self.load_rules(row.id)?;
                row.into_result(rules)
            })
            .collect()
    }

    fn delete_analysis(&mut self, analysis_id: i64) -> StorageResult<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM analyses WHERE id = ?1", params![analysis_id])?;

        if deleted == 0 {
            return Err(StorageError::AnalysisNotFound(analysis_id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success(url: &str, rules: &[(&str, &str)]) -> AnalysisResult {
        AnalysisResult::success(
            url,
            RobotsReport {
                robots_url: format!("http://{}/robots.txt", url),
                google_disallowed: !rules.is_empty(),
                disallow_rules: rules
                    .iter()
                    .map(|(agent, rule)| DisallowRule {
                        agent: agent.to_string(),
                        rule: rule.to_string(),
                    })
                    .collect(),
                robots_content: "User-agent: Googlebot\n".to_string(),
            },
        )
    }

    #[test]
    fn test_create_and_get_analysis() {
        let mut storage = SqliteStorage::new_in_memory().unwrap();
        let id = storage.create_analysis(Some("weekly"), "abc123").unwrap();

        let record = storage.get_analysis(id).unwrap();
        assert_eq!(record.id, id);
        assert_eq!(record.batch_name.as_deref(), Some("weekly"));
        assert_eq!(record.config_hash, "abc123");
        assert_eq!(record.result_count, 0);
    }

    #[test]
    fn test_get_missing_analysis() {
        let storage = SqliteStorage::new_in_memory().unwrap();
        assert!(matches!(
            storage.get_analysis(42),
            Err(StorageError::AnalysisNotFound(42))
        ));
    }

    #[test]
    fn test_save_and_load_results() {
        let mut storage = SqliteStorage::new_in_memory().unwrap();
        let id = storage.create_analysis(None, "default").unwrap();

        let results = vec![
            success("a.com", &[("Googlebot", "/z"), ("Googlebot", "/a"), ("Google", "/z")]),
            AnalysisResult::failure("b.com", "Failed to fetch robots.txt: 404"),
            success("c.com", &[]),
        ];
        storage.save_results(id, &results).unwrap();

        let loaded = storage.load_results(id).unwrap();
        assert_eq!(loaded, results);
        assert_eq!(storage.get_analysis(id).unwrap().result_count, 3);
    }

    #[test]
    fn test_save_to_missing_analysis() {
        let mut storage = SqliteStorage::new_in_memory().unwrap();
        let result = storage.save_results(7, &[AnalysisResult::failure("x", "y")]);
        assert!(matches!(result, Err(StorageError::AnalysisNotFound(7))));
    }

    #[test]
    fn test_results_isolated_per_analysis() {
        let mut storage = SqliteStorage::new_in_memory().unwrap();
        let first = storage.create_analysis(None, "h").unwrap();
        let second = storage.create_analysis(None, "h").unwrap();

        storage
            .save_results(first, &[success("a.com", &[("Googlebot", "/x")])])
            .unwrap();
        storage
            .save_results(second, &[AnalysisResult::failure("b.com", "nope")])
            .unwrap();

        let loaded = storage.load_results(second).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].url, "b.com");
    }

    #[test]
    fn test_list_analyses_newest_first() {
        let mut storage = SqliteStorage::new_in_memory().unwrap();
        let first = storage.create_analysis(Some("one"), "h").unwrap();
        let second = storage.create_analysis(Some("two"), "h").unwrap();
        let third = storage.create_analysis(Some("three"), "h").unwrap();

        let listed = storage.list_analyses(2).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, third);
        assert_eq!(listed[1].id, second);
        assert!(listed.iter().all(|r| r.id != first));
    }

    #[test]
    fn test_delete_cascades() {
        let mut storage = SqliteStorage::new_in_memory().unwrap();
        let id = storage.create_analysis(None, "h").unwrap();
        storage
            .save_results(id, &[success("a.com", &[("Googlebot", "/x")])])
            .unwrap();

        storage.delete_analysis(id).unwrap();

        assert!(matches!(
            storage.load_results(id),
            Err(StorageError::AnalysisNotFound(_))
        ));
        let orphan_rules: i64 = storage
            .conn
            .query_row("SELECT COUNT(*) FROM disallow_rules", [], |row| row.get(0))
            .unwrap();
        assert_eq!(orphan_rules, 0);
    }

    #[test]
    fn test_delete_missing_analysis() {
        let mut storage = SqliteStorage::new_in_memory().unwrap();
        assert!(matches!(
            storage.delete_analysis(3),
            Err(StorageError::AnalysisNotFound(3))
        ));
    }

    #[test]
    fn test_unknown_status_is_corrupt() {
        let mut storage = SqliteStorage::new_in_memory().unwrap();
        let id = storage.create_analysis(None, "h").unwrap();
        storage
            .conn
            .execute(
                "INSERT INTO analysis_results (analysis_id, url, status, created_at)
                 VALUES (?1, 'x.com', 'pending', 'now')",
                params![id],
            )
            .unwrap();

        assert!(matches!(
            storage.load_results(id),
            Err(StorageError::CorruptRecord(_))
        ));
    }
}
