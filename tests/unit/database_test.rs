//! Unit tests for the database layer (connection + migrations).

use i2p_browser::database::migrations::{get_schema_version, CURRENT_SCHEMA_VERSION};
use i2p_browser::database::Database;
use tempfile::TempDir;

fn table_exists(db: &Database, table: &str) -> bool {
    db.connection()
        .query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name=?1",
            [table],
            |row| row.get(0),
        )
        .unwrap_or(false)
}

#[test]
fn test_open_in_memory_succeeds() {
    let db = Database::open_in_memory();
    assert!(db.is_ok(), "open_in_memory should succeed");
}

#[test]
fn test_migrations_create_all_tables() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    for table in ["history", "bookmarks", "downloads", "schema_version"] {
        assert!(table_exists(&db, table), "Table '{}' should exist after migrations", table);
    }
}

#[test]
fn test_schema_version_is_current() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(get_schema_version(db.connection()), CURRENT_SCHEMA_VERSION);
}

#[test]
fn test_reopening_file_database_keeps_data_and_version() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("browser.db");

    {
        let db = Database::open(&path).unwrap();
        db.connection()
            .execute(
                "INSERT INTO bookmarks (id, url, title, created_at) VALUES ('b1', 'https://geti2p.net', 'I2P', 1)",
                [],
            )
            .unwrap();
    }

    let db = Database::open(&path).unwrap();
    let count: i64 = db
        .connection()
        .query_row("SELECT COUNT(*) FROM bookmarks", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1, "Data must survive reopening");

    let versions: i64 = db
        .connection()
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(
        versions,
        CURRENT_SCHEMA_VERSION as i64,
        "Migrations must not be recorded twice"
    );
}

#[test]
fn test_history_url_is_unique() {
    let db = Database::open_in_memory().unwrap();
    let conn = db.connection();
    conn.execute(
        "INSERT INTO history (id, url, title, last_visited) VALUES ('h1', 'https://a.com', 'A', 1)",
        [],
    )
    .unwrap();
    let dup = conn.execute(
        "INSERT INTO history (id, url, title, last_visited) VALUES ('h2', 'https://a.com', 'A', 2)",
        [],
    );
    assert!(dup.is_err(), "A URL may only appear once in history");
}

/// A database created before downloads existed gains the table on open.
#[test]
fn test_v1_database_is_upgraded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("browser.db");

    {
        let db = Database::open(&path).unwrap();
        let conn = db.connection();
        conn.execute_batch("DROP TABLE downloads; DELETE FROM schema_version WHERE version = 2;")
            .unwrap();
        assert_eq!(get_schema_version(conn), 1);
    }

    let db = Database::open(&path).unwrap();
    assert!(table_exists(&db, "downloads"));
    assert_eq!(get_schema_version(db.connection()), 2);
}
