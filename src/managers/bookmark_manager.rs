//! Bookmark Manager.
//!
//! A flat bookmark list in SQLite via `rusqlite`, one entry per URL.

use rusqlite::{params, Connection};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::navigation::is_web_url;
use crate::types::bookmark::Bookmark;
use crate::types::errors::BookmarkError;

/// Trait defining bookmark management operations.
pub trait BookmarkManagerTrait {
    fn add_bookmark(&mut self, url: &str, title: &str) -> Result<String, BookmarkError>;
    fn remove_bookmark(&mut self, id: &str) -> Result<(), BookmarkError>;
    fn is_bookmarked(&self, url: &str) -> Result<bool, BookmarkError>;
    fn list_bookmarks(&self) -> Result<Vec<Bookmark>, BookmarkError>;
}

/// Bookmark manager backed by a SQLite connection.
pub struct BookmarkManager<'a> {
    conn: &'a Connection,
}

impl<'a> BookmarkManager<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

fn db_err(e: rusqlite::Error) -> BookmarkError {
    BookmarkError::DatabaseError(e.to_string())
}

impl<'a> BookmarkManagerTrait for BookmarkManager<'a> {
    /// Adds a bookmark and returns its ID. Only http(s) URLs are accepted and
    /// each URL can be bookmarked once.
    fn add_bookmark(&mut self, url: &str, title: &str) -> Result<String, BookmarkError> {
        if !is_web_url(url) {
            return Err(BookmarkError::InvalidUrl(url.to_string()));
        }
        if self.is_bookmarked(url)? {
            return Err(BookmarkError::DuplicateUrl(url.to_string()));
        }

        let id = Uuid::new_v4().to_string();
        let title = if title.trim().is_empty() { url } else { title };
        self.conn
            .execute(
                "INSERT INTO bookmarks (id, url, title, created_at) VALUES (?1, ?2, ?3, ?4)",
                params![id, url, title, Self::now()],
            )
            .map_err(db_err)?;
        Ok(id)
    }

    fn remove_bookmark(&mut self, id: &str) -> Result<(), BookmarkError> {
        let affected = self
            .conn
            .execute("DELETE FROM bookmarks WHERE id = ?1", params![id])
            .map_err(db_err)?;
        if affected == 0 {
            return Err(BookmarkError::NotFound(id.to_string()));
        }
        Ok(())
    }

    fn is_bookmarked(&self, url: &str) -> Result<bool, BookmarkError> {
        self.conn
            .query_row(
                "SELECT COUNT(*) > 0 FROM bookmarks WHERE url = ?1",
                params![url],
                |row| row.get(0),
            )
            .map_err(db_err)
    }

    /// Newest first.
    fn list_bookmarks(&self) -> Result<Vec<Bookmark>, BookmarkError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, url, title, created_at FROM bookmarks \
                 ORDER BY created_at DESC, rowid DESC",
            )
            .map_err(db_err)?;

        let rows = stmt
            .query_map([], |row| {
                Ok(Bookmark {
                    id: row.get(0)?,
                    url: row.get(1)?,
                    title: row.get(2)?,
                    created_at: row.get(3)?,
                })
            })
            .map_err(db_err)?;

        rows.collect::<Result<Vec<_>, _>>().map_err(db_err)
    }
}
