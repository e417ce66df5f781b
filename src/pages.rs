//! Internal pages (`about:history`, `about:bookmarks`, `about:downloads`)
//! rendered into a tab.
//!
//! Links are plain anchors so the engine navigates them like any other page.
//! Actions post `ToolbarMessage` JSON over the view's IPC channel, stamped
//! with the token the page was rendered with.

use crate::types::bookmark::Bookmark;
use crate::types::download::DownloadItem;
use crate::types::history::HistoryEntry;

pub const HISTORY_URL: &str = "about:history";
pub const BOOKMARKS_URL: &str = "about:bookmarks";
pub const DOWNLOADS_URL: &str = "about:downloads";

const PAGE_CSS: &str = "body{margin:0;padding:32px 48px;background:#1c1c1e;color:#f2f2f7;\
font-family:-apple-system,BlinkMacSystemFont,'SF Pro Text',sans-serif}\
h1{font-size:22px;font-weight:600;margin:0 0 20px}\
ul{list-style:none;padding:0;margin:0}\
li{display:flex;align-items:center;gap:12px;padding:10px 12px;border-radius:8px}\
li:hover{background:#2c2c2e}\
a{color:#0a84ff;text-decoration:none;flex:1;overflow:hidden;text-overflow:ellipsis;white-space:nowrap}\
.meta{color:#8e8e93;font-size:12px}\
button{background:#2c2c2e;color:#f2f2f7;border:1px solid #3a3a3c;border-radius:6px;padding:4px 10px;cursor:pointer}\
.empty{color:#8e8e93}";


/// Escapes text for use in HTML element content and double-quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `token` is a hex UUID and goes into the script as is.
fn page(title: &str, header_extra: &str, items: &str, token: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><title>{title}</title>\
<style>{PAGE_CSS}</style>\
<script>function send(m){{m.token='{token}';if(window.ipc)window.ipc.postMessage(JSON.stringify(m))}}</script></head>\
<body><h1>{title} {header_extra}</h1><ul>{items}</ul></body></html>"
    )
}

pub fn history_html(entries: &[HistoryEntry], token: &str) -> String {
    let items = if entries.is_empty() {
        "<li class=\"empty\">No pages visited yet.</li>".to_string()
    } else {
        entries
            .iter()
            .map(|e| {
                format!(
                    "<li><a href=\"{url}\" title=\"{url}\">{title}</a><span class=\"meta\">{count}×</span></li>",
                    url = escape_html(&e.url),
                    title = escape_html(&e.title),
                    count = e.visit_count,
                )
            })
            .collect()
    };
    page(
        "History",
        "<button onclick=\"send({cmd:'clear_history'})\">Clear</button>",
        &items,
        token,
    )
}

pub fn bookmarks_html(bookmarks: &[Bookmark], token: &str) -> String {
    let items = if bookmarks.is_empty() {
        "<li class=\"empty\">No bookmarks yet.</li>".to_string()
    } else {
        bookmarks
            .iter()
            .map(|b| {
                format!(
                    "<li><a href=\"{url}\" title=\"{url}\">{title}</a>\
<button onclick=\"send({{cmd:'remove_bookmark',id:'{id}'}})\">Remove</button></li>",
                    url = escape_html(&b.url),
                    title = escape_html(&b.title),
                    id = escape_html(&b.id),
                )
            })
            .collect()
    };
    page("Bookmarks", "", &items, token)
}

pub fn downloads_html(downloads: &[DownloadItem], token: &str) -> String {
    let items = if downloads.is_empty() {
        "<li class=\"empty\">No downloads yet.</li>".to_string()
    } else {
        downloads
            .iter()
            .map(|d| {
                format!(
                    "<li><a href=\"{url}\" title=\"{path}\">{name}</a><span class=\"meta\">{status}</span></li>",
                    url = escape_html(&d.url),
                    path = escape_html(&d.filepath),
                    name = escape_html(&d.filename),
                    status = d.status.label(),
                )
            })
            .collect()
    };
    page(
        "Downloads",
        "<button onclick=\"send({cmd:'clear_downloads'})\">Clear</button>",
        &items,
        token,
    )
}
