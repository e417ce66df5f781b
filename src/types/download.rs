use serde::{Deserialize, Serialize};

/// Where a download stands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DownloadStatus {
    InProgress,
    Completed,
    Failed,
}

impl DownloadStatus {
    /// Value stored in the `downloads.status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            DownloadStatus::InProgress => "in_progress",
            DownloadStatus::Completed => "completed",
            DownloadStatus::Failed => "failed",
        }
    }

    /// Unknown values read back as `Failed`.
    pub fn parse(s: &str) -> Self {
        match s {
            "in_progress" => DownloadStatus::InProgress,
            "completed" => DownloadStatus::Completed,
            _ => DownloadStatus::Failed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DownloadStatus::InProgress => "Downloading",
            DownloadStatus::Completed => "Completed",
            DownloadStatus::Failed => "Failed",
        }
    }
}

/// A file the engine saved (or tried to save) to disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DownloadItem {
    pub id: String,
    pub url: String,
    pub filename: String,
    pub filepath: String,
    pub status: DownloadStatus,
    pub started_at: i64,
    pub completed_at: Option<i64>,
}
