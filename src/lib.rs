//! I2P Browser: a minimal tabbed desktop browser shell over the system
//! WebView, with a cosmetic I2P proxy switch.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod database;
pub mod ipc_handler;
pub mod managers;
pub mod navigation;
pub mod pages;
pub mod platform;
pub mod services;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
