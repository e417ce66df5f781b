use serde::{Deserialize, Serialize};

/// One visited address. Repeat visits update the same entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub url: String,
    pub title: String,
    /// UNIX seconds of the most recent visit.
    pub last_visited: i64,
    pub visit_count: i64,
}
