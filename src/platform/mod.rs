// Platform paths for the browser's config and data files.
//
// Resolved through `dirs`, which follows XDG on Linux, `~/Library/Application
// Support` on macOS and `%APPDATA%` on Windows.

use std::path::PathBuf;

const APP_DIR: &str = "i2p-browser";

/// Directory holding `settings.json`.
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
}

/// Directory holding the history and bookmarks database.
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
}

/// Where downloads are saved: the user's download folder, or a
/// `downloads` folder under the data directory when there is none.
pub fn get_download_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| get_data_dir().join("downloads"))
}

pub fn default_settings_path() -> PathBuf {
    get_config_dir().join("settings.json")
}

pub fn default_database_path() -> PathBuf {
    get_data_dir().join("browser.db")
}
