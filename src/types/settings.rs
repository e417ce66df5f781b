use serde::{Deserialize, Serialize};

/// User agent sent by every tab, regardless of the host platform.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; rv:120.0) Gecko/20100101 Firefox/120.0";

/// Top-level browser settings container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BrowserSettings {
    pub general: GeneralSettings,
    pub window: WindowSettings,
    pub network: NetworkSettings,
    pub privacy: PrivacySettings,
}

/// Start pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralSettings {
    pub homepage: String,
    pub new_tab_url: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            homepage: "https://google.com/".to_string(),
            new_tab_url: "https://google.com/".to_string(),
        }
    }
}

/// Main window title, geometry and icon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub icon_path: String,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "I2P Browser".to_string(),
            x: 100,
            y: 100,
            width: 1200,
            height: 800,
            icon_path: "i2p_icon.png".to_string(),
        }
    }
}

/// Request identity and the initial state of the proxy switch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NetworkSettings {
    pub user_agent: String,
    /// Initial checkbox state. The switch only drives the status label.
    pub proxy_enabled: bool,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            proxy_enabled: true,
        }
    }
}

/// Per-view engine attributes and history recording.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PrivacySettings {
    pub javascript_enabled: bool,
    /// When false, tab views use a non-persistent data store.
    pub local_storage_enabled: bool,
    pub record_history: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            javascript_enabled: true,
            local_storage_enabled: false,
            record_history: true,
        }
    }
}
