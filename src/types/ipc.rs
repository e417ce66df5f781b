//! Messages exchanged between the toolbar page, the engine views and the
//! shell controller.

use serde::{Deserialize, Serialize};

/// A message posted by the toolbar page through `window.ipc.postMessage`.
///
/// Encoded as JSON tagged by `cmd`, e.g. `{"cmd":"switch_tab","id":"..."}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum ToolbarMessage {
    UiReady,
    Back,
    Forward,
    Reload,
    Home,
    NewTab,
    CloseTab { id: String },
    SwitchTab { id: String },
    Navigate { url: String },
    ToggleProxy { enabled: bool },
    AddBookmark,
    ShowHistory,
    ClearHistory,
    ShowBookmarks,
    RemoveBookmark { id: String },
    ShowDownloads,
    ClearDownloads,
    ShowUserAgent,
}

/// A message posted from inside a tab's view.
///
/// Internal pages stamp every message with the token they were rendered
/// with, e.g. `{"token":"...","cmd":"clear_history"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentMessage {
    #[serde(default)]
    pub token: String,
    #[serde(flatten)]
    pub message: ToolbarMessage,
}

/// Something a tab's engine view reported.
///
/// Load events are main-frame only. Navigation requests are not reported:
/// they also fire for subframes and for responses that never commit.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    LoadStarted { tab_id: String, url: String },
    /// The main frame committed and finished loading `url`.
    LoadFinished { tab_id: String, url: String },
    TitleChanged { tab_id: String, title: String },
    /// The page asked for a new window (e.g. `target="_blank"`).
    NewWindowRequested { url: String },
    /// The engine began saving `url` to `path`.
    DownloadStarted { url: String, path: String },
    DownloadFinished { url: String, path: Option<String>, success: bool },
}

/// An instruction for the GUI layer. The controller never touches views
/// directly; it returns these and the event loop applies them in order.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCommand {
    CreateView { tab_id: String, url: String },
    DestroyView { tab_id: String },
    /// Make this tab's view visible and hide every other one.
    ShowView { tab_id: String },
    LoadUrl { tab_id: String, url: String },
    LoadHtml { tab_id: String, html: String },
    GoBack { tab_id: String },
    GoForward { tab_id: String },
    Reload { tab_id: String },
    SyncToolbar(ToolbarState),
}

/// One entry of the toolbar's tab strip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabSummary {
    pub id: String,
    pub title: String,
    pub url: String,
}

/// Everything the toolbar page renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolbarState {
    pub tabs: Vec<TabSummary>,
    pub active_id: String,
    pub url_bar: String,
    pub proxy_enabled: bool,
    pub proxy_label: String,
    pub proxy_color: String,
    pub status_message: String,
}
