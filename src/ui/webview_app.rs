//! WebView-based browser window.
//!
//! One `tao` window holds two kinds of `wry` views:
//! - the toolbar page (`resources/ui/toolbar.html`), pinned to the top
//! - one content view per tab below it; only the active one is visible
//!
//! Every callback only forwards a [`UserEvent`] through the event loop
//! proxy. The event loop owns [`App`], runs the shell controller and applies
//! the returned [`ViewCommand`]s, so no state is shared across threads.

use std::collections::HashMap;
use std::path::PathBuf;

use tao::dpi::{LogicalPosition, LogicalSize};
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};
use tao::window::{Window, WindowBuilder};
use wry::{PageLoadEvent, WebView, WebViewBuilder};

use crate::app::App;
use crate::ipc_handler::{
    handle_content_message, handle_message, handle_page_event, parse_content_message, parse_message,
};
use crate::managers::download_manager::download_target;
use crate::navigation::normalize_url;
use crate::platform;
use crate::types::errors::AppError;
use crate::types::ipc::{PageEvent, ToolbarState, ViewCommand};
use crate::ui::icon::load_icon;
#[cfg(not(target_os = "linux"))]
use crate::ui::layout::{Area, Layout};
#[cfg(target_os = "linux")]
use crate::ui::layout::TOOLBAR_HEIGHT;

const TOOLBAR_HTML: &str = include_str!("../../resources/ui/toolbar.html");

enum UserEvent {
    /// Raw IPC body posted by the toolbar page.
    Toolbar(String),
    /// Raw IPC body posted from inside a tab (internal pages only).
    Content { tab_id: String, body: String },
    Page(PageEvent),
}

/// Command-line overrides for a browser launch.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Address for the first tab instead of the homepage.
    pub url: Option<String>,
    pub settings_path: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    /// Window icon instead of `window.icon_path` from settings.
    pub icon: Option<PathBuf>,
}

/// Per-view engine options taken from settings at startup.
struct ViewOptions {
    user_agent: String,
    incognito: bool,
    javascript_enabled: bool,
    download_dir: PathBuf,
}

struct TabView {
    webview: WebView,
    #[cfg(target_os = "linux")]
    container: gtk::Box,
}

/// Owns the window and every view in it.
struct Views {
    window: Window,
    toolbar: WebView,
    tabs: HashMap<String, TabView>,
    /// Window title from settings; the active tab's title is prefixed to it.
    base_title: String,
    options: ViewOptions,
    proxy: EventLoopProxy<UserEvent>,
    #[cfg(target_os = "linux")]
    content: gtk::Box,
}

fn gui_err(e: impl std::fmt::Display) -> AppError {
    AppError::Gui(e.to_string())
}

#[cfg(not(target_os = "linux"))]
fn rect(area: Area) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::LogicalPosition::new(area.x, area.y).into(),
        size: wry::dpi::LogicalSize::new(area.width, area.height).into(),
    }
}

impl Views {
    #[cfg(not(target_os = "linux"))]
    fn layout(&self) -> Layout {
        let size = self.window.inner_size().to_logical::<f64>(self.window.scale_factor());
        Layout::new(size.width, size.height)
    }

    /// Re-applies bounds after a resize. GTK packs the views itself on Linux.
    fn relayout(&self) {
        #[cfg(not(target_os = "linux"))]
        {
            let layout = self.layout();
            if let Err(e) = self.toolbar.set_bounds(rect(layout.toolbar())) {
                log::warn!("[UI] toolbar bounds: {}", e);
            }
            for view in self.tabs.values() {
                if let Err(e) = view.webview.set_bounds(rect(layout.content())) {
                    log::warn!("[UI] tab bounds: {}", e);
                }
            }
        }
    }

    fn tab_builder<'a>(&self, tab_id: &str, url: &str) -> WebViewBuilder<'a> {
        let nav_id = tab_id.to_string();
        let load_proxy = self.proxy.clone();
        let load_id = tab_id.to_string();
        let title_proxy = self.proxy.clone();
        let title_id = tab_id.to_string();
        let ipc_proxy = self.proxy.clone();
        let ipc_id = tab_id.to_string();
        let nw_proxy = self.proxy.clone();
        let dl_proxy = self.proxy.clone();
        let dl_dir = self.options.download_dir.clone();
        let done_proxy = self.proxy.clone();

        let builder = WebViewBuilder::new()
            .with_url(url)
            .with_user_agent(&self.options.user_agent)
            .with_incognito(self.options.incognito)
            // Requests include subframes and downloads; the address only
            // changes once a main-frame load finishes.
            .with_navigation_handler(move |url| {
                log::debug!("[NAV] {} requested {}", nav_id, url);
                true
            })
            .with_on_page_load_handler(move |event, url| {
                let tab_id = load_id.clone();
                let event = match event {
                    PageLoadEvent::Started => PageEvent::LoadStarted { tab_id, url },
                    PageLoadEvent::Finished => PageEvent::LoadFinished { tab_id, url },
                };
                let _ = load_proxy.send_event(UserEvent::Page(event));
            })
            .with_document_title_changed_handler(move |title| {
                let _ = title_proxy.send_event(UserEvent::Page(PageEvent::TitleChanged {
                    tab_id: title_id.clone(),
                    title,
                }));
            })
            .with_ipc_handler(move |msg: wry::http::Request<String>| {
                let _ = ipc_proxy.send_event(UserEvent::Content {
                    tab_id: ipc_id.clone(),
                    body: msg.body().clone(),
                });
            })
            .with_new_window_req_handler(move |url, _features| {
                let _ = nw_proxy.send_event(UserEvent::Page(PageEvent::NewWindowRequested { url }));
                wry::NewWindowResponse::Deny
            })
            .with_download_started_handler(move |url, path| {
                let target = download_target(&dl_dir, &url, path);
                *path = target.clone();
                let _ = dl_proxy.send_event(UserEvent::Page(PageEvent::DownloadStarted {
                    url,
                    path: target.display().to_string(),
                }));
                true
            })
            .with_download_completed_handler(move |url, path, success| {
                let _ = done_proxy.send_event(UserEvent::Page(PageEvent::DownloadFinished {
                    url,
                    path: path.map(|p| p.display().to_string()),
                    success,
                }));
            })
            .with_devtools(cfg!(debug_assertions));

        if self.options.javascript_enabled {
            builder
        } else {
            builder.with_javascript_disabled()
        }
    }

    #[cfg(target_os = "linux")]
    fn create_tab_view(&mut self, tab_id: &str, url: &str) -> Result<(), wry::Error> {
        use gtk::prelude::*;
        use wry::WebViewBuilderExtUnix;

        let container = gtk::Box::new(gtk::Orientation::Vertical, 0);
        container.set_vexpand(true);
        self.content.pack_start(&container, true, true, 0);
        container.show_all();
        let webview = self.tab_builder(tab_id, url).build_gtk(&container)?;
        self.tabs.insert(tab_id.to_string(), TabView { webview, container });
        Ok(())
    }

    #[cfg(not(target_os = "linux"))]
    fn create_tab_view(&mut self, tab_id: &str, url: &str) -> Result<(), wry::Error> {
        let bounds = rect(self.layout().content());
        let webview = self
            .tab_builder(tab_id, url)
            .with_bounds(bounds)
            .with_visible(false)
            .build_as_child(&self.window)?;
        self.tabs.insert(tab_id.to_string(), TabView { webview });
        Ok(())
    }

    fn destroy_tab_view(&mut self, tab_id: &str) {
        let Some(view) = self.tabs.remove(tab_id) else {
            return;
        };
        #[cfg(target_os = "linux")]
        {
            use gtk::prelude::*;
            self.content.remove(&view.container);
        }
        drop(view);
    }

    fn show_tab_view(&self, tab_id: &str) {
        for (id, view) in &self.tabs {
            let visible = id == tab_id;
            #[cfg(target_os = "linux")]
            {
                use gtk::prelude::*;
                view.container.set_visible(visible);
            }
            if let Err(e) = view.webview.set_visible(visible) {
                log::warn!("[UI] cannot toggle view {}: {}", id, e);
            }
        }
        self.relayout();
    }

    fn with_tab(&self, tab_id: &str, what: &str, f: impl FnOnce(&WebView) -> wry::Result<()>) {
        match self.tabs.get(tab_id) {
            Some(view) => {
                if let Err(e) = f(&view.webview) {
                    log::warn!("[UI] {} failed for {}: {}", what, tab_id, e);
                }
            }
            None => log::warn!("[UI] {} for unknown view {}", what, tab_id),
        }
    }

    fn sync_toolbar(&self, state: &ToolbarState) {
        match state.tabs.iter().find(|t| t.id == state.active_id) {
            Some(tab) => self.window.set_title(&format!("{} - {}", tab.title, self.base_title)),
            None => self.window.set_title(&self.base_title),
        }
        let json = match serde_json::to_string(state) {
            Ok(json) => json,
            Err(e) => {
                log::error!("[UI] cannot encode toolbar state: {}", e);
                return;
            }
        };
        let js = format!("if(window.__i2p_update)__i2p_update({})", json);
        if let Err(e) = self.toolbar.evaluate_script(&js) {
            log::warn!("[UI] toolbar update failed: {}", e);
        }
    }

    fn apply(&mut self, cmd: ViewCommand) {
        match cmd {
            ViewCommand::CreateView { tab_id, url } => {
                if let Err(e) = self.create_tab_view(&tab_id, &url) {
                    log::error!("[UI] cannot create view for {}: {}", tab_id, e);
                }
            }
            ViewCommand::DestroyView { tab_id } => self.destroy_tab_view(&tab_id),
            ViewCommand::ShowView { tab_id } => self.show_tab_view(&tab_id),
            ViewCommand::LoadUrl { tab_id, url } => {
                self.with_tab(&tab_id, "load", |wv| wv.load_url(&url))
            }
            ViewCommand::LoadHtml { tab_id, html } => {
                self.with_tab(&tab_id, "render", |wv| wv.load_html(&html))
            }
            ViewCommand::GoBack { tab_id } => {
                self.with_tab(&tab_id, "back", |wv| wv.evaluate_script("history.back()"))
            }
            ViewCommand::GoForward { tab_id } => {
                self.with_tab(&tab_id, "forward", |wv| wv.evaluate_script("history.forward()"))
            }
            ViewCommand::Reload { tab_id } => {
                self.with_tab(&tab_id, "reload", |wv| wv.reload())
            }
            ViewCommand::SyncToolbar(state) => self.sync_toolbar(&state),
        }
    }
}

fn build_window(
    event_loop: &EventLoop<UserEvent>,
    app: &App,
    icon: Option<PathBuf>,
) -> Result<Window, AppError> {
    let ws = &app.settings().window;
    let mut builder = WindowBuilder::new()
        .with_title(ws.title.as_str())
        .with_position(LogicalPosition::new(ws.x, ws.y))
        .with_inner_size(LogicalSize::new(ws.width, ws.height));

    let icon_path = icon.unwrap_or_else(|| PathBuf::from(&ws.icon_path));
    match load_icon(&icon_path) {
        Ok(icon) => builder = builder.with_window_icon(Some(icon)),
        Err(e) => log::warn!("Window icon {} not loaded: {}", icon_path.display(), e),
    }

    builder.build(event_loop).map_err(gui_err)
}

/// Opens the browser window and runs the event loop until it is closed.
pub fn run(options: LaunchOptions) -> Result<(), AppError> {
    let db_path = match options.data_dir {
        Some(dir) => dir.join("browser.db"),
        None => platform::default_database_path(),
    };
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut app = App::new(&db_path, options.settings_path)?;

    let start_url = options.url.as_deref().and_then(normalize_url);
    let first_tab = app.startup(start_url.as_deref());
    let first_url = app.url_bar.clone();

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();
    let window = build_window(&event_loop, &app, options.icon)?;

    let toolbar_proxy = proxy.clone();
    let toolbar_builder = WebViewBuilder::new()
        .with_html(TOOLBAR_HTML)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let _ = toolbar_proxy.send_event(UserEvent::Toolbar(msg.body().clone()));
        })
        .with_devtools(cfg!(debug_assertions));

    let base_title = app.settings().window.title.clone();
    let privacy = &app.settings().privacy;
    let view_options = ViewOptions {
        user_agent: app.settings().network.user_agent.clone(),
        incognito: !privacy.local_storage_enabled,
        javascript_enabled: privacy.javascript_enabled,
        download_dir: platform::get_download_dir(),
    };
    if let Err(e) = std::fs::create_dir_all(&view_options.download_dir) {
        log::warn!(
            "Download folder {} not available: {}",
            view_options.download_dir.display(),
            e
        );
    }

    #[cfg(target_os = "linux")]
    let mut views = {
        use gtk::prelude::*;
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;

        let vbox = window
            .default_vbox()
            .ok_or_else(|| AppError::Gui("window has no GTK container".into()))?;

        let toolbar_box = gtk::Box::new(gtk::Orientation::Vertical, 0);
        toolbar_box.set_size_request(-1, TOOLBAR_HEIGHT as i32);
        let content = gtk::Box::new(gtk::Orientation::Vertical, 0);
        content.set_vexpand(true);

        vbox.pack_start(&toolbar_box, false, false, 0);
        vbox.pack_start(&content, true, true, 0);
        vbox.show_all();

        let toolbar = toolbar_builder.build_gtk(&toolbar_box).map_err(gui_err)?;
        Views {
            window,
            toolbar,
            tabs: HashMap::new(),
            base_title,
            options: view_options,
            proxy,
            content,
        }
    };

    #[cfg(not(target_os = "linux"))]
    let mut views = {
        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        let toolbar = toolbar_builder
            .with_bounds(rect(Layout::new(size.width, size.height).toolbar()))
            .build_as_child(&window)
            .map_err(gui_err)?;
        Views {
            window,
            toolbar,
            tabs: HashMap::new(),
            base_title,
            options: view_options,
            proxy,
        }
    };

    views.create_tab_view(&first_tab, &first_url).map_err(gui_err)?;
    views.show_tab_view(&first_tab);
    log::info!("Browser window ready");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                log::info!("Window closed, {} tab(s) open", views.tabs.len());
                *control_flow = ControlFlow::Exit;
            }

            Event::WindowEvent {
                event: WindowEvent::Resized(_),
                ..
            } => views.relayout(),

            Event::UserEvent(user_event) => {
                let cmds = match user_event {
                    UserEvent::Toolbar(body) => match parse_message(&body) {
                        Ok(msg) => {
                            log::debug!("[IPC] {:?}", msg);
                            handle_message(&mut app, msg)
                        }
                        Err(e) => {
                            let head: String = body.chars().take(200).collect();
                            log::warn!("[IPC] bad toolbar message {}: {}", head, e);
                            Vec::new()
                        }
                    },
                    UserEvent::Content { tab_id, body } => match parse_content_message(&body) {
                        Ok(msg) => handle_content_message(&mut app, &tab_id, msg),
                        Err(e) => {
                            log::warn!("[IPC] bad message from tab {}: {}", tab_id, e);
                            Vec::new()
                        }
                    },
                    UserEvent::Page(event) => {
                        log::debug!("[PAGE] {:?}", event);
                        handle_page_event(&mut app, event)
                    }
                };
                for cmd in cmds {
                    views.apply(cmd);
                }
            }

            _ => {}
        }
    });
}
