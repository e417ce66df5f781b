use serde::{Deserialize, Serialize};

/// A browser tab: one engine view, its current address and its label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tab {
    pub id: String,
    pub url: String,
    pub title: String,
    pub created_at: i64,
}
