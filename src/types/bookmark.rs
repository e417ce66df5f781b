use serde::{Deserialize, Serialize};

/// Represents a saved bookmark.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: String,
    pub url: String,
    pub title: String,
    pub created_at: i64,
}
