//! History Manager.
//!
//! Records visited pages in SQLite via `rusqlite`. Each URL has one row;
//! revisiting bumps its counter and refreshes the title and time.

use rusqlite::{params, Connection, OptionalExtension};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::types::errors::HistoryError;
use crate::types::history::HistoryEntry;

/// Trait defining history management operations.
pub trait HistoryManagerTrait {
    fn record_visit(&mut self, url: &str, title: &str) -> Result<String, HistoryError>;
    fn update_title(&self, url: &str, title: &str) -> Result<(), HistoryError>;
    fn list_recent(&self, limit: usize) -> Result<Vec<HistoryEntry>, HistoryError>;
    fn clear_all(&mut self) -> Result<(), HistoryError>;
    fn set_recording_enabled(&mut self, enabled: bool);
}

/// History manager backed by a SQLite connection.
pub struct HistoryManager<'a> {
    conn: &'a Connection,
    recording_enabled: bool,
}

impl<'a> HistoryManager<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self {
            conn,
            recording_enabled: true,
        }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn row_to_entry(row: &rusqlite::Row) -> rusqlite::Result<HistoryEntry> {
        Ok(HistoryEntry {
            id: row.get(0)?,
            url: row.get(1)?,
            title: row.get(2)?,
            last_visited: row.get(3)?,
            visit_count: row.get(4)?,
        })
    }
}

fn db_err(e: rusqlite::Error) -> HistoryError {
    HistoryError::DatabaseError(e.to_string())
}

impl<'a> HistoryManagerTrait for HistoryManager<'a> {
    /// Records a page visit and returns the entry ID.
    fn record_visit(&mut self, url: &str, title: &str) -> Result<String, HistoryError> {
        if !self.recording_enabled {
            return Err(HistoryError::RecordingDisabled);
        }

        let now = Self::now();
        let existing: Option<String> = self
            .conn
            .query_row("SELECT id FROM history WHERE url = ?1", params![url], |row| row.get(0))
            .optional()
            .map_err(db_err)?;

        match existing {
            Some(id) => {
                self.conn
                    .execute(
                        "UPDATE history SET visit_count = visit_count + 1, last_visited = ?1, title = ?2 WHERE id = ?3",
                        params![now, title, id],
                    )
                    .map_err(db_err)?;
                Ok(id)
            }
            None => {
                let id = Uuid::new_v4().to_string();
                self.conn
                    .execute(
                        "INSERT INTO history (id, url, title, last_visited, visit_count) VALUES (?1, ?2, ?3, ?4, 1)",
                        params![id, url, title, now],
                    )
                    .map_err(db_err)?;
                Ok(id)
            }
        }
    }

    /// Pages often report their title after the load finished. Unknown URLs
    /// are left alone.
    fn update_title(&self, url: &str, title: &str) -> Result<(), HistoryError> {
        self.conn
            .execute("UPDATE history SET title = ?1 WHERE url = ?2", params![title, url])
            .map_err(db_err)?;
        Ok(())
    }

    /// Most recently visited first. Ties keep insertion order reversed.
    fn list_recent(&self, limit: usize) -> Result<Vec<HistoryEntry>, HistoryError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, url, title, last_visited, visit_count \
                 FROM history ORDER BY last_visited DESC, rowid DESC LIMIT ?1",
            )
            .map_err(db_err)?;

        let rows = stmt
            .query_map(params![limit as i64], Self::row_to_entry)
            .map_err(db_err)?;

        rows.collect::<Result<Vec<_>, _>>().map_err(db_err)
    }

    fn clear_all(&mut self) -> Result<(), HistoryError> {
        self.conn.execute("DELETE FROM history", []).map_err(db_err)?;
        Ok(())
    }

    /// Switched off by `privacy.record_history = false`.
    fn set_recording_enabled(&mut self, enabled: bool) {
        self.recording_enabled = enabled;
    }
}
