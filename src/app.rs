//! App Core.
//!
//! Central struct holding the database, settings, tabs and the proxy
//! indicator, plus the toolbar-only state (URL field text, status message).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::database::connection::Database;
use crate::managers::tab_manager::{TabManager, TabManagerTrait};
use crate::services::proxy_indicator::{ProxyIndicator, ProxyIndicatorTrait};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::errors::AppError;
use crate::types::ipc::{TabSummary, ToolbarState};
use crate::types::settings::BrowserSettings;

/// Label of the tab opened at startup.
pub const FIRST_TAB_TITLE: &str = "Home";
/// Label of tabs opened from the `+` button.
pub const NEW_TAB_TITLE: &str = "New Tab";

/// Central application struct.
///
/// BookmarkManager and HistoryManager are created on demand from
/// `db.connection()` because they borrow the connection.
pub struct App {
    pub db: Database,
    pub settings_engine: SettingsEngine,
    pub tab_manager: TabManager,
    pub proxy_indicator: ProxyIndicator,
    /// Text shown in the URL field.
    pub url_bar: String,
    /// Transient text shown next to the proxy label.
    pub status_message: String,
    /// Token of the internal page each tab currently shows.
    page_tokens: HashMap<String, String>,
}

impl App {
    /// Opens the database at `db_path` and loads settings from
    /// `settings_path` (or the platform default), writing defaults on first run.
    pub fn new(db_path: &Path, settings_path: Option<PathBuf>) -> Result<Self, AppError> {
        let mut settings_engine = SettingsEngine::new(settings_path);
        settings_engine.load_or_init()?;
        Self::with_engine(Database::open(db_path)?, settings_engine)
    }

    /// An app over an in-memory database with the given settings. Nothing is
    /// written to disk.
    pub fn in_memory(settings: BrowserSettings) -> Result<Self, AppError> {
        let engine = SettingsEngine::with_settings(PathBuf::from("settings.json"), settings);
        Self::with_engine(Database::open_in_memory()?, engine)
    }

    fn with_engine(db: Database, settings_engine: SettingsEngine) -> Result<Self, AppError> {
        let proxy_indicator =
            ProxyIndicator::new(settings_engine.get_settings().network.proxy_enabled);
        Ok(Self {
            db,
            settings_engine,
            tab_manager: TabManager::new(),
            proxy_indicator,
            url_bar: String::new(),
            status_message: String::new(),
            page_tokens: HashMap::new(),
        })
    }

    pub fn settings(&self) -> &BrowserSettings {
        self.settings_engine.get_settings()
    }

    /// Opens the first tab at `url` (the homepage when `None`) and returns its id.
    pub fn startup(&mut self, url: Option<&str>) -> String {
        let url = url
            .map(str::to_string)
            .unwrap_or_else(|| self.settings().general.homepage.clone());
        let id = self.tab_manager.create_tab(&url, FIRST_TAB_TITLE, true);
        self.url_bar = url;
        log::info!("Opened first tab {}", id);
        id
    }

    /// Id of the active tab. Always present after [`startup`](Self::startup).
    pub fn active_tab_id(&self) -> Option<String> {
        self.tab_manager.get_active_tab().map(|t| t.id.clone())
    }

    /// Token the internal page in `tab_id` was rendered with, if it shows one.
    pub fn page_token(&self, tab_id: &str) -> Option<&str> {
        self.page_tokens.get(tab_id).map(String::as_str)
    }

    /// Mints a fresh token for a page about to be rendered in `tab_id`.
    /// Earlier tokens for that tab stop working.
    pub fn issue_page_token(&mut self, tab_id: &str) -> String {
        let token = Uuid::new_v4().simple().to_string();
        self.page_tokens.insert(tab_id.to_string(), token.clone());
        token
    }

    pub fn revoke_page_token(&mut self, tab_id: &str) {
        self.page_tokens.remove(tab_id);
    }

    /// Snapshot of everything the toolbar page renders.
    pub fn toolbar_state(&self) -> ToolbarState {
        let status = self.proxy_indicator.status();
        ToolbarState {
            tabs: self
                .tab_manager
                .get_all_tabs()
                .into_iter()
                .map(|t| TabSummary {
                    id: t.id.clone(),
                    title: t.title.clone(),
                    url: t.url.clone(),
                })
                .collect(),
            active_id: self.active_tab_id().unwrap_or_default(),
            url_bar: self.url_bar.clone(),
            proxy_enabled: self.proxy_indicator.is_enabled(),
            proxy_label: status.label().to_string(),
            proxy_color: status.color().to_string(),
            status_message: self.status_message.clone(),
        }
    }
}
