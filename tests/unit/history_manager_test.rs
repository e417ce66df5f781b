//! Unit tests for the HistoryManager public API.
//!
//! These tests exercise history recording, listing, clearing and the
//! recording switch through the `HistoryManagerTrait` interface, using an
//! in-memory SQLite database.

use i2p_browser::database::Database;
use i2p_browser::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use i2p_browser::types::errors::HistoryError;

/// Helper: a fresh in-memory database.
fn setup() -> Database {
    Database::open_in_memory().expect("Failed to open in-memory database")
}

/// Visiting the same URL multiple times should increment visit_count and
/// keep a single row.
#[test]
fn test_visit_count_increments_on_repeated_visits() {
    let db = setup();
    let mut mgr = HistoryManager::new(db.connection());

    let url = "https://example.com";

    // First visit — visit_count should be 1
    let id = mgr.record_visit(url, "Example").unwrap();
    let entries = mgr.list_recent(10).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].visit_count, 1);

    // Second visit — same URL, same entry
    let id2 = mgr.record_visit(url, "Example Domain").unwrap();
    assert_eq!(id, id2, "Repeated visit should return the same entry ID");
    let entries = mgr.list_recent(10).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].visit_count, 2);
    assert_eq!(entries[0].title, "Example Domain", "Latest title wins");
}

/// Entries come back most recent first and respect the limit.
#[test]
fn test_list_recent_orders_by_last_visit() {
    let db = setup();
    let mut mgr = HistoryManager::new(db.connection());
    mgr.record_visit("https://a.com", "A").unwrap();
    mgr.record_visit("https://b.com", "B").unwrap();
    mgr.record_visit("https://c.com", "C").unwrap();
    db.connection()
        .execute("UPDATE history SET last_visited = 100 WHERE url = 'https://a.com'", [])
        .unwrap();
    db.connection()
        .execute("UPDATE history SET last_visited = 300 WHERE url = 'https://b.com'", [])
        .unwrap();
    db.connection()
        .execute("UPDATE history SET last_visited = 200 WHERE url = 'https://c.com'", [])
        .unwrap();

    let urls: Vec<String> = mgr.list_recent(10).unwrap().into_iter().map(|e| e.url).collect();
    assert_eq!(urls, ["https://b.com", "https://c.com", "https://a.com"]);

    assert_eq!(mgr.list_recent(2).unwrap().len(), 2);
    assert!(mgr.list_recent(0).unwrap().is_empty());
}

#[test]
fn test_update_title_only_touches_matching_url() {
    let db = setup();
    let mut mgr = HistoryManager::new(db.connection());
    mgr.record_visit("https://a.com", "a.com").unwrap();
    mgr.record_visit("https://b.com", "b.com").unwrap();

    mgr.update_title("https://a.com", "Site A").unwrap();
    // Unknown URL is not an error.
    mgr.update_title("https://zzz.com", "Z").unwrap();

    let entries = mgr.list_recent(10).unwrap();
    let a = entries.iter().find(|e| e.url == "https://a.com").unwrap();
    let b = entries.iter().find(|e| e.url == "https://b.com").unwrap();
    assert_eq!(a.title, "Site A");
    assert_eq!(b.title, "b.com");
    assert_eq!(entries.len(), 2);
}

/// clear_all should remove all history entries from the database.
#[test]
fn test_clear_all_removes_everything() {
    let db = setup();
    let mut mgr = HistoryManager::new(db.connection());
    mgr.record_visit("https://a.com", "A").unwrap();
    mgr.record_visit("https://b.com", "B").unwrap();

    mgr.clear_all().unwrap();

    assert!(mgr.list_recent(10).unwrap().is_empty());
}

/// With recording disabled nothing is written.
#[test]
fn test_recording_disabled_rejects_visits() {
    let db = setup();
    let mut mgr = HistoryManager::new(db.connection());
    mgr.set_recording_enabled(false);

    let result = mgr.record_visit("https://a.com", "A");

    assert!(matches!(result, Err(HistoryError::RecordingDisabled)));
    assert!(mgr.list_recent(10).unwrap().is_empty());

    mgr.set_recording_enabled(true);
    assert!(mgr.record_visit("https://a.com", "A").is_ok());
}
