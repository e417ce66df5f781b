//! Shell controller: turns toolbar messages and engine page events into
//! state changes on [`App`] plus a list of [`ViewCommand`]s for the GUI layer.
//!
//! Kept free of any GUI type so every behaviour here is unit-testable.

use crate::app::{App, FIRST_TAB_TITLE, NEW_TAB_TITLE};
use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use crate::managers::download_manager::{DownloadManager, DownloadManagerTrait};
use crate::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use crate::managers::tab_manager::TabManagerTrait;
use crate::navigation::{is_web_url, normalize_url, title_from_url};
use crate::pages::{self, BOOKMARKS_URL, DOWNLOADS_URL, HISTORY_URL};
use crate::services::proxy_indicator::ProxyIndicatorTrait;
use crate::types::errors::{HistoryError, TabError};
use crate::types::ipc::{ContentMessage, PageEvent, ToolbarMessage, ViewCommand};

/// How many history entries the history page lists.
pub const HISTORY_PAGE_LIMIT: usize = 200;

/// Decodes an IPC message body posted by the toolbar.
pub fn parse_message(body: &str) -> Result<ToolbarMessage, serde_json::Error> {
    serde_json::from_str(body)
}

/// Decodes an IPC message body posted from inside a tab. A missing token
/// decodes as empty and is refused later.
pub fn parse_content_message(body: &str) -> Result<ContentMessage, serde_json::Error> {
    serde_json::from_str(body)
}

fn sync(app: &App) -> ViewCommand {
    ViewCommand::SyncToolbar(app.toolbar_state())
}

fn is_internal(url: &str) -> bool {
    url == HISTORY_URL || url == BOOKMARKS_URL || url == DOWNLOADS_URL
}

/// Handles a message from the toolbar page.
pub fn handle_message(app: &mut App, msg: ToolbarMessage) -> Vec<ViewCommand> {
    let Some(active) = app.active_tab_id() else {
        log::warn!("[IPC] {:?} with no open tab", msg);
        return Vec::new();
    };

    match msg {
        ToolbarMessage::UiReady => vec![sync(app)],

        ToolbarMessage::Back => vec![ViewCommand::GoBack { tab_id: active }],
        ToolbarMessage::Forward => vec![ViewCommand::GoForward { tab_id: active }],
        ToolbarMessage::Reload => {
            let url = app.tab_manager.get_tab(&active).map(|t| t.url.clone()).unwrap_or_default();
            if is_internal(&url) {
                let mut cmds: Vec<ViewCommand> = render_internal(app, &active, &url).into_iter().collect();
                cmds.push(sync(app));
                cmds
            } else {
                vec![ViewCommand::Reload { tab_id: active }]
            }
        }

        ToolbarMessage::Home => {
            let home = app.settings().general.homepage.clone();
            load_in_tab(app, &active, home)
        }

        ToolbarMessage::Navigate { url } => match normalize_url(&url) {
            Some(url) => load_in_tab(app, &active, url),
            None => Vec::new(),
        },

        ToolbarMessage::NewTab => {
            let url = app.settings().general.new_tab_url.clone();
            open_tab(app, url, NEW_TAB_TITLE)
        }

        ToolbarMessage::CloseTab { id } => match app.tab_manager.close_tab(&id) {
            Ok(()) => {
                log::info!("[TAB] closed {}", id);
                app.revoke_page_token(&id);
                let mut cmds = vec![ViewCommand::DestroyView { tab_id: id }];
                if let Some(tab) = app.tab_manager.get_active_tab() {
                    if tab.id != active {
                        app.status_message.clear();
                    }
                    app.url_bar = tab.url.clone();
                    cmds.push(ViewCommand::ShowView { tab_id: tab.id.clone() });
                }
                cmds.push(sync(app));
                cmds
            }
            Err(TabError::LastTab(_)) => {
                log::debug!("[TAB] refusing to close the last tab");
                Vec::new()
            }
            Err(e) => {
                log::warn!("[TAB] close failed: {}", e);
                Vec::new()
            }
        },

        ToolbarMessage::SwitchTab { id } => match app.tab_manager.switch_tab(&id) {
            Ok(()) => {
                app.url_bar = app
                    .tab_manager
                    .get_tab(&id)
                    .map(|t| t.url.clone())
                    .unwrap_or_default();
                // Status text belongs to the tab it was reported for.
                app.status_message.clear();
                vec![ViewCommand::ShowView { tab_id: id }, sync(app)]
            }
            Err(e) => {
                log::warn!("[TAB] switch failed: {}", e);
                Vec::new()
            }
        },

        ToolbarMessage::ToggleProxy { enabled } => {
            app.proxy_indicator.set_enabled(enabled);
            log::info!("[PROXY] {}", app.proxy_indicator.status().label());
            vec![sync(app)]
        }

        ToolbarMessage::AddBookmark => {
            let Some(tab) = app.tab_manager.get_tab(&active).cloned() else {
                return Vec::new();
            };
            let mut mgr = BookmarkManager::new(app.db.connection());
            app.status_message = match mgr.add_bookmark(&tab.url, &tab.title) {
                Ok(_) => format!("Bookmark added: {}", tab.url),
                Err(e) => {
                    log::info!("[BOOKMARK] {}", e);
                    e.to_string()
                }
            };
            vec![sync(app)]
        }

        ToolbarMessage::ShowHistory => show_internal(app, &active, HISTORY_URL, "History"),
        ToolbarMessage::ShowBookmarks => show_internal(app, &active, BOOKMARKS_URL, "Bookmarks"),
        ToolbarMessage::ShowDownloads => show_internal(app, &active, DOWNLOADS_URL, "Downloads"),

        ToolbarMessage::ClearHistory => {
            let mut mgr = HistoryManager::new(app.db.connection());
            app.status_message = match mgr.clear_all() {
                Ok(()) => "History cleared".to_string(),
                Err(e) => {
                    log::warn!("[HISTORY] {}", e);
                    e.to_string()
                }
            };
            refresh_internal(app, HISTORY_URL)
        }

        ToolbarMessage::RemoveBookmark { id } => {
            let mut mgr = BookmarkManager::new(app.db.connection());
            app.status_message = match mgr.remove_bookmark(&id) {
                Ok(()) => "Bookmark removed".to_string(),
                Err(e) => {
                    log::warn!("[BOOKMARK] {}", e);
                    e.to_string()
                }
            };
            refresh_internal(app, BOOKMARKS_URL)
        }

        ToolbarMessage::ClearDownloads => {
            let mut mgr = DownloadManager::new(app.db.connection());
            app.status_message = match mgr.clear_all() {
                Ok(()) => "Downloads cleared".to_string(),
                Err(e) => {
                    log::warn!("[DOWNLOAD] {}", e);
                    e.to_string()
                }
            };
            refresh_internal(app, DOWNLOADS_URL)
        }

        ToolbarMessage::ShowUserAgent => {
            app.status_message = app.settings().network.user_agent.clone();
            vec![sync(app)]
        }
    }
}

/// Handles a message posted from inside a tab's view.
///
/// Only the internal page the tab currently shows may post: the tab's address
/// must be internal and the message must carry the token that page was
/// rendered with. A document that replaced the page before the shell saw the
/// load finish has no way to know it. Only the actions pages render pass.
pub fn handle_content_message(app: &mut App, tab_id: &str, msg: ContentMessage) -> Vec<ViewCommand> {
    let from_internal = app
        .tab_manager
        .get_tab(tab_id)
        .map(|t| is_internal(&t.url))
        .unwrap_or(false);
    let token_ok = app.page_token(tab_id).is_some_and(|t| t == msg.token);
    if !from_internal || !token_ok {
        log::warn!("[IPC] ignoring {:?} from tab {}", msg.message, tab_id);
        return Vec::new();
    }
    match msg.message {
        msg @ (ToolbarMessage::ClearHistory
        | ToolbarMessage::RemoveBookmark { .. }
        | ToolbarMessage::ClearDownloads) => handle_message(app, msg),
        other => {
            log::warn!("[IPC] {:?} is not allowed from page content", other);
            Vec::new()
        }
    }
}

/// Handles an event reported by a tab's engine view.
pub fn handle_page_event(app: &mut App, event: PageEvent) -> Vec<ViewCommand> {
    match event {
        PageEvent::LoadStarted { tab_id, url } => {
            if !accepts_url(app, &tab_id, &url) || !is_active(app, &tab_id) {
                return Vec::new();
            }
            app.status_message = "Loading…".to_string();
            vec![sync(app)]
        }

        PageEvent::LoadFinished { tab_id, url } => {
            if !accepts_url(app, &tab_id, &url) {
                return Vec::new();
            }
            set_tab_url(app, &tab_id, &url);
            if is_active(app, &tab_id) {
                app.status_message = "Loaded".to_string();
            }
            if is_web_url(&url) {
                record_visit(app, &tab_id, &url);
            }
            vec![sync(app)]
        }

        PageEvent::TitleChanged { tab_id, title } => {
            let title = title.trim();
            let Some(tab) = app.tab_manager.get_tab(&tab_id).cloned() else {
                return Vec::new();
            };
            if title.is_empty() || title == tab.title {
                return Vec::new();
            }
            if app.tab_manager.update_tab_title(&tab_id, title).is_err() {
                return Vec::new();
            }
            if is_web_url(&tab.url) && app.settings().privacy.record_history {
                let mgr = HistoryManager::new(app.db.connection());
                if let Err(e) = mgr.update_title(&tab.url, title) {
                    log::warn!("[HISTORY] {}", e);
                }
            }
            vec![sync(app)]
        }

        PageEvent::NewWindowRequested { url } => {
            if !is_web_url(&url) {
                log::info!("[NW] ignoring {}", url);
                return Vec::new();
            }
            let title = title_from_url(&url);
            open_tab(app, url, &title)
        }

        PageEvent::DownloadStarted { url, path } => {
            log::info!("[DOWNLOAD] {} -> {}", url, path);
            let mut mgr = DownloadManager::new(app.db.connection());
            if let Err(e) = mgr.start_download(&url, &path) {
                log::warn!("[DOWNLOAD] {}", e);
            }
            app.status_message = format!("Downloading → {}", path);
            refresh_internal(app, DOWNLOADS_URL)
        }

        PageEvent::DownloadFinished { url, path, success } => {
            log::info!("[DOWNLOAD] {} finished, success={}", url, success);
            let mut mgr = DownloadManager::new(app.db.connection());
            let name = match mgr.finish_download(&url, path.as_deref(), success) {
                Ok(item) => item.filename,
                Err(e) => {
                    log::warn!("[DOWNLOAD] {}", e);
                    title_from_url(&url)
                }
            };
            app.status_message = if success {
                format!("Download complete: {}", name)
            } else {
                format!("Download failed: {}", name)
            };
            refresh_internal(app, DOWNLOADS_URL)
        }
    }
}

// ─── Helpers ───

fn is_active(app: &App, tab_id: &str) -> bool {
    app.active_tab_id().as_deref() == Some(tab_id)
}

/// Engine reports for closed tabs, and the `about:blank`/`data:` addresses
/// an internal page is loaded under, do not change the tab's address.
fn accepts_url(app: &App, tab_id: &str, url: &str) -> bool {
    match app.tab_manager.get_tab(tab_id) {
        Some(tab) => is_web_url(url) || !is_internal(&tab.url),
        None => false,
    }
}

/// Updates a tab's address; the URL field follows only the active tab.
/// Leaving an internal page revokes its token.
fn set_tab_url(app: &mut App, tab_id: &str, url: &str) {
    if !is_internal(url) {
        app.revoke_page_token(tab_id);
    }
    if app.tab_manager.update_tab_url(tab_id, url).is_ok() && is_active(app, tab_id) {
        app.url_bar = url.to_string();
    }
}

fn load_in_tab(app: &mut App, tab_id: &str, url: String) -> Vec<ViewCommand> {
    log::info!("[NAV] {} -> {}", tab_id, url);
    set_tab_url(app, tab_id, &url);
    vec![
        ViewCommand::LoadUrl { tab_id: tab_id.to_string(), url },
        sync(app),
    ]
}

fn open_tab(app: &mut App, url: String, title: &str) -> Vec<ViewCommand> {
    let id = app.tab_manager.create_tab(&url, title, true);
    log::info!("[TAB] opened {} at {}", id, url);
    app.url_bar = url.clone();
    app.status_message.clear();
    vec![
        ViewCommand::CreateView { tab_id: id.clone(), url },
        ViewCommand::ShowView { tab_id: id },
        sync(app),
    ]
}

fn show_internal(app: &mut App, tab_id: &str, url: &str, title: &str) -> Vec<ViewCommand> {
    set_tab_url(app, tab_id, url);
    let _ = app.tab_manager.update_tab_title(tab_id, title);
    let mut cmds: Vec<ViewCommand> = render_internal(app, tab_id, url).into_iter().collect();
    cmds.push(sync(app));
    cmds
}

/// Renders an internal page under a fresh token.
fn render_internal(app: &mut App, tab_id: &str, url: &str) -> Option<ViewCommand> {
    let token = app.issue_page_token(tab_id);
    let conn = app.db.connection();
    let html = match url {
        HISTORY_URL => HistoryManager::new(conn)
            .list_recent(HISTORY_PAGE_LIMIT)
            .map(|entries| pages::history_html(&entries, &token))
            .map_err(|e| e.to_string()),
        BOOKMARKS_URL => BookmarkManager::new(conn)
            .list_bookmarks()
            .map(|bookmarks| pages::bookmarks_html(&bookmarks, &token))
            .map_err(|e| e.to_string()),
        _ => DownloadManager::new(conn)
            .list_downloads()
            .map(|downloads| pages::downloads_html(&downloads, &token))
            .map_err(|e| e.to_string()),
    };
    match html {
        Ok(html) => Some(ViewCommand::LoadHtml { tab_id: tab_id.to_string(), html }),
        Err(e) => {
            log::warn!("[PAGE] cannot render {}: {}", url, e);
            app.revoke_page_token(tab_id);
            None
        }
    }
}

/// Re-renders every tab currently showing `url`.
fn refresh_internal(app: &mut App, url: &str) -> Vec<ViewCommand> {
    let ids: Vec<String> = app
        .tab_manager
        .get_all_tabs()
        .into_iter()
        .filter(|t| t.url == url)
        .map(|t| t.id.clone())
        .collect();
    let mut cmds: Vec<ViewCommand> = ids
        .iter()
        .filter_map(|id| render_internal(app, id, url))
        .collect();
    cmds.push(sync(app));
    cmds
}

fn record_visit(app: &App, tab_id: &str, url: &str) {
    let title = match app.tab_manager.get_tab(tab_id) {
        Some(t) if t.title != NEW_TAB_TITLE && t.title != FIRST_TAB_TITLE => t.title.clone(),
        _ => title_from_url(url),
    };
    let mut mgr = HistoryManager::new(app.db.connection());
    mgr.set_recording_enabled(app.settings().privacy.record_history);
    match mgr.record_visit(url, &title) {
        Ok(_) | Err(HistoryError::RecordingDisabled) => {}
        Err(e) => log::warn!("[HISTORY] {}", e),
    }
}
