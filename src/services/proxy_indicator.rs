// Proxy Indicator
// Backs the "Use I2P Proxy" switch. The switch is cosmetic: it only decides
// what the status label says. No network route is ever configured.

use crate::types::proxy::ProxyStatus;

/// Trait defining the proxy indicator interface.
pub trait ProxyIndicatorTrait {
    fn set_enabled(&mut self, enabled: bool);
    fn is_enabled(&self) -> bool;
    fn status(&self) -> ProxyStatus;
}

#[derive(Debug, Clone)]
pub struct ProxyIndicator {
    enabled: bool,
}

impl ProxyIndicator {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Default for ProxyIndicator {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ProxyIndicatorTrait for ProxyIndicator {
    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn status(&self) -> ProxyStatus {
        if self.enabled {
            ProxyStatus::Connected
        } else {
            ProxyStatus::Disconnected
        }
    }
}
