use serde::{Deserialize, Serialize};

/// What the proxy status label displays.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProxyStatus {
    Connected,
    Disconnected,
}

impl ProxyStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProxyStatus::Connected => "Proxy: Connected",
            ProxyStatus::Disconnected => "Proxy: Disconnected",
        }
    }

    /// Foreground color of the status label.
    pub fn color(self) -> &'static str {
        match self {
            ProxyStatus::Connected => "#30d158",
            ProxyStatus::Disconnected => "#ff453a",
        }
    }
}
