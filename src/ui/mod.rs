//! UI layer.
//!
//! Uses `wry` for WebView rendering and `tao` for the window:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The toolbar (tab strip, navigation buttons, URL field, proxy switch) is an
//! HTML page in its own WebView; every tab is a separate WebView below it.

pub mod icon;
pub mod layout;
pub mod webview_app;
