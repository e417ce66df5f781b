use thiserror::Error;

// === TabError ===

/// Errors related to tab management operations.
#[derive(Debug, Error)]
pub enum TabError {
    /// Tab with the given ID was not found.
    #[error("Tab not found: {0}")]
    NotFound(String),
    /// The tab is the only one open and cannot be closed.
    #[error("Cannot close the last open tab: {0}")]
    LastTab(String),
}

// === SettingsError ===

/// Errors related to the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Reading or writing the config file failed.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// The config file could not be parsed or written as JSON.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
}

// === HistoryError ===

/// Errors related to browsing history.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Recording is switched off in settings.
    #[error("History recording is disabled")]
    RecordingDisabled,
    /// Underlying SQLite failure.
    #[error("History database error: {0}")]
    DatabaseError(String),
}

// === BookmarkError ===

/// Errors related to bookmark operations.
#[derive(Debug, Error)]
pub enum BookmarkError {
    /// Bookmark with the given ID was not found.
    #[error("Bookmark not found: {0}")]
    NotFound(String),
    /// A bookmark with the same URL already exists.
    #[error("Bookmark already exists for URL: {0}")]
    DuplicateUrl(String),
    /// Only http(s) pages can be bookmarked.
    #[error("Cannot bookmark URL: {0}")]
    InvalidUrl(String),
    /// Underlying SQLite failure.
    #[error("Bookmark database error: {0}")]
    DatabaseError(String),
}

// === DownloadError ===

/// Errors related to the download list.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// No unfinished download matches the URL.
    #[error("No download in progress for: {0}")]
    NotFound(String),
    /// Underlying SQLite failure.
    #[error("Download database error: {0}")]
    DatabaseError(String),
}

// === AppError ===

/// Top-level errors surfaced while starting or running the browser.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Window, event loop or webview creation failed.
    #[error("GUI error: {0}")]
    Gui(String),
}
