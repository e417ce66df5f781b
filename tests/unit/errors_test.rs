use i2p_browser::types::errors::*;

// === TabError Tests ===

#[test]
fn tab_error_not_found_display() {
    let err = TabError::NotFound("tab-123".to_string());
    assert_eq!(err.to_string(), "Tab not found: tab-123");
}

#[test]
fn tab_error_last_tab_display() {
    let err = TabError::LastTab("tab-1".to_string());
    assert_eq!(err.to_string(), "Cannot close the last open tab: tab-1");
}

#[test]
fn tab_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(TabError::NotFound("id".to_string()));
    assert!(err.source().is_none());
}

// === SettingsError Tests ===

#[test]
fn settings_error_display() {
    assert_eq!(
        SettingsError::IoError("disk full".to_string()).to_string(),
        "Settings I/O error: disk full"
    );
    assert_eq!(
        SettingsError::SerializationError("bad json".to_string()).to_string(),
        "Settings serialization error: bad json"
    );
}

// === HistoryError Tests ===

#[test]
fn history_error_display() {
    assert_eq!(
        HistoryError::RecordingDisabled.to_string(),
        "History recording is disabled"
    );
    assert_eq!(
        HistoryError::DatabaseError("locked".to_string()).to_string(),
        "History database error: locked"
    );
}

// === BookmarkError Tests ===

#[test]
fn bookmark_error_display() {
    assert_eq!(
        BookmarkError::NotFound("b1".to_string()).to_string(),
        "Bookmark not found: b1"
    );
    assert_eq!(
        BookmarkError::DuplicateUrl("https://geti2p.net".to_string()).to_string(),
        "Bookmark already exists for URL: https://geti2p.net"
    );
    assert_eq!(
        BookmarkError::InvalidUrl("about:history".to_string()).to_string(),
        "Cannot bookmark URL: about:history"
    );
}

// === AppError Tests ===

#[test]
fn app_error_settings_is_transparent() {
    let err: AppError = SettingsError::IoError("nope".to_string()).into();
    assert_eq!(err.to_string(), "Settings I/O error: nope");
}

#[test]
fn app_error_from_io() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: AppError = io.into();
    assert!(matches!(err, AppError::Io(_)));
    assert_eq!(err.to_string(), "I/O error: denied");
}

#[test]
fn app_error_gui_display() {
    let err = AppError::Gui("no display".to_string());
    assert_eq!(err.to_string(), "GUI error: no display");
}
