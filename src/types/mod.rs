// Shared type definitions
// Each submodule defines types used across the application.

pub mod bookmark;
pub mod download;
pub mod errors;
pub mod history;
pub mod ipc;
pub mod proxy;
pub mod settings;
pub mod tab;
