//! Download Manager.
//!
//! The engine does the transfer; this keeps the list of what was saved where,
//! in SQLite via `rusqlite`, and picks the file each download lands in.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::types::download::{DownloadItem, DownloadStatus};
use crate::types::errors::DownloadError;

const FALLBACK_NAME: &str = "download";

/// Trait defining download list operations.
pub trait DownloadManagerTrait {
    fn start_download(&mut self, url: &str, filepath: &str) -> Result<String, DownloadError>;
    fn finish_download(
        &mut self,
        url: &str,
        filepath: Option<&str>,
        success: bool,
    ) -> Result<DownloadItem, DownloadError>;
    fn list_downloads(&self) -> Result<Vec<DownloadItem>, DownloadError>;
    fn clear_all(&mut self) -> Result<(), DownloadError>;
}

/// Download list backed by a SQLite connection.
pub struct DownloadManager<'a> {
    conn: &'a Connection,
}

impl<'a> DownloadManager<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn row_to_item(row: &rusqlite::Row) -> rusqlite::Result<DownloadItem> {
        let status: String = row.get(4)?;
        Ok(DownloadItem {
            id: row.get(0)?,
            url: row.get(1)?,
            filename: row.get(2)?,
            filepath: row.get(3)?,
            status: DownloadStatus::parse(&status),
            started_at: row.get(5)?,
            completed_at: row.get(6)?,
        })
    }

    fn get(&self, id: &str) -> Result<DownloadItem, DownloadError> {
        self.conn
            .query_row(
                "SELECT id, url, filename, filepath, status, started_at, completed_at \
                 FROM downloads WHERE id = ?1",
                params![id],
                Self::row_to_item,
            )
            .map_err(db_err)
    }
}

fn db_err(e: rusqlite::Error) -> DownloadError {
    DownloadError::DatabaseError(e.to_string())
}

fn file_name_of(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}

impl<'a> DownloadManagerTrait for DownloadManager<'a> {
    /// Adds an in-progress entry and returns its ID.
    fn start_download(&mut self, url: &str, filepath: &str) -> Result<String, DownloadError> {
        let id = Uuid::new_v4().to_string();
        self.conn
            .execute(
                "INSERT INTO downloads (id, url, filename, filepath, status, started_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    id,
                    url,
                    file_name_of(filepath),
                    filepath,
                    DownloadStatus::InProgress.as_str(),
                    Self::now()
                ],
            )
            .map_err(db_err)?;
        Ok(id)
    }

    /// Marks the newest unfinished download of `url` as completed or failed.
    /// A path reported by the engine replaces the one chosen at start.
    fn finish_download(
        &mut self,
        url: &str,
        filepath: Option<&str>,
        success: bool,
    ) -> Result<DownloadItem, DownloadError> {
        let id: String = self
            .conn
            .query_row(
                "SELECT id FROM downloads WHERE url = ?1 AND status = ?2 \
                 ORDER BY started_at DESC, rowid DESC LIMIT 1",
                params![url, DownloadStatus::InProgress.as_str()],
                |row| row.get(0),
            )
            .optional()
            .map_err(db_err)?
            .ok_or_else(|| DownloadError::NotFound(url.to_string()))?;

        let status = if success {
            DownloadStatus::Completed
        } else {
            DownloadStatus::Failed
        };
        self.conn
            .execute(
                "UPDATE downloads SET status = ?1, completed_at = ?2 WHERE id = ?3",
                params![status.as_str(), Self::now(), id],
            )
            .map_err(db_err)?;

        if let Some(path) = filepath.filter(|p| !p.is_empty()) {
            self.conn
                .execute(
                    "UPDATE downloads SET filepath = ?1, filename = ?2 WHERE id = ?3",
                    params![path, file_name_of(path), id],
                )
                .map_err(db_err)?;
        }

        self.get(&id)
    }

    /// Newest first.
    fn list_downloads(&self) -> Result<Vec<DownloadItem>, DownloadError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, url, filename, filepath, status, started_at, completed_at \
                 FROM downloads ORDER BY started_at DESC, rowid DESC",
            )
            .map_err(db_err)?;

        let rows = stmt.query_map([], Self::row_to_item).map_err(db_err)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(db_err)
    }

    /// Forgets the list. Files on disk are kept.
    fn clear_all(&mut self) -> Result<(), DownloadError> {
        self.conn.execute("DELETE FROM downloads", []).map_err(db_err)?;
        Ok(())
    }
}

/// Picks the file a download of `url` is saved to inside `dir`.
///
/// The name comes from the engine's suggestion, else the last URL path
/// segment, else `download`. Only the final path component is used, and an
/// existing file gets a ` (n)` suffix instead of being overwritten.
pub fn download_target(dir: &Path, url: &str, suggested: &Path) -> PathBuf {
    let name = suggested
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
        .or_else(|| name_from_url(url))
        .unwrap_or_else(|| FALLBACK_NAME.to_string());

    let candidate = dir.join(&name);
    if !candidate.exists() {
        return candidate;
    }

    let as_path = Path::new(&name);
    let stem = as_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.clone());
    let ext = as_path.extension().map(|e| e.to_string_lossy().into_owned());

    (1u32..)
        .map(|n| match &ext {
            Some(ext) => dir.join(format!("{stem} ({n}).{ext}")),
            None => dir.join(format!("{stem} ({n})")),
        })
        .find(|p| !p.exists())
        .unwrap_or(candidate)
}

fn name_from_url(url: &str) -> Option<String> {
    let without_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    let path = without_scheme.split(['?', '#']).next().unwrap_or("");
    // First segment is the host.
    let (_, path) = path.split_once('/')?;
    let last = path.rsplit('/').find(|s| !s.is_empty())?;
    Path::new(last)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| n != "..")
}
