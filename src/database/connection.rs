//! SQLite connection management.

use rusqlite::Connection;
use std::path::Path;

use super::migrations;

/// Owns the browser's `rusqlite::Connection`; migrations run on open.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (or creates) the database file at `path` and runs migrations.
    ///
    /// # Errors
    /// Returns `rusqlite::Error` if the connection cannot be established or migrations fail.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path)?;
        migrations::run_all(&conn)?;
        Ok(Self { conn })
    }

    /// In-memory database, discarded on drop.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_in_memory()?;
        migrations::run_all(&conn)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
