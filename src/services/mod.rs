// Services
// Settings persistence and the proxy status indicator.

pub mod proxy_indicator;
pub mod settings_engine;
