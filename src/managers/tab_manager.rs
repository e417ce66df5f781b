use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::types::errors::TabError;
use crate::types::tab::Tab;

/// Trait defining the tab management interface.
pub trait TabManagerTrait {
    fn create_tab(&mut self, url: &str, title: &str, active: bool) -> String;
    fn close_tab(&mut self, tab_id: &str) -> Result<(), TabError>;
    fn switch_tab(&mut self, tab_id: &str) -> Result<(), TabError>;
    fn get_tab(&self, tab_id: &str) -> Option<&Tab>;
    fn get_all_tabs(&self) -> Vec<&Tab>;
    fn get_active_tab(&self) -> Option<&Tab>;
    fn tab_count(&self) -> usize;
    fn get_tab_order(&self) -> &[String];
    fn update_tab_url(&mut self, tab_id: &str, url: &str) -> Result<(), TabError>;
    fn update_tab_title(&mut self, tab_id: &str, title: &str) -> Result<(), TabError>;
}

/// In-memory tab manager for the browser window.
///
/// Once a tab exists the manager never drops below one tab: closing the
/// only remaining tab is refused with [`TabError::LastTab`].
pub struct TabManager {
    tabs: Vec<Tab>,
    tab_order: Vec<String>,
    active_tab_id: Option<String>,
}

impl TabManager {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            tab_order: Vec::new(),
            active_tab_id: None,
        }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn find_tab_index(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    fn find_order_index(&self, tab_id: &str) -> Option<usize> {
        self.tab_order.iter().position(|id| id == tab_id)
    }

    fn tab_mut(&mut self, tab_id: &str) -> Result<&mut Tab, TabError> {
        self.tabs
            .iter_mut()
            .find(|t| t.id == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TabManagerTrait for TabManager {
    /// Create a new tab at the end of the tab strip. Returns the new tab's ID.
    fn create_tab(&mut self, url: &str, title: &str, active: bool) -> String {
        let id = Uuid::new_v4().to_string();
        self.tabs.push(Tab {
            id: id.clone(),
            url: url.to_string(),
            title: title.to_string(),
            created_at: Self::now(),
        });
        self.tab_order.push(id.clone());
        if active || self.active_tab_id.is_none() {
            self.active_tab_id = Some(id.clone());
        }
        id
    }

    /// Close a tab. If it's the active tab, switch to the right neighbour
    /// (or the new rightmost tab).
    fn close_tab(&mut self, tab_id: &str) -> Result<(), TabError> {
        let tab_idx = self
            .find_tab_index(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        let order_idx = self
            .find_order_index(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;

        if self.tabs.len() == 1 {
            return Err(TabError::LastTab(tab_id.to_string()));
        }

        let need_switch = self.active_tab_id.as_deref() == Some(tab_id);

        self.tabs.remove(tab_idx);
        self.tab_order.remove(order_idx);

        if need_switch {
            let new_order_idx = order_idx.min(self.tab_order.len() - 1);
            self.active_tab_id = Some(self.tab_order[new_order_idx].clone());
        }

        Ok(())
    }

    fn switch_tab(&mut self, tab_id: &str) -> Result<(), TabError> {
        if self.find_tab_index(tab_id).is_none() {
            return Err(TabError::NotFound(tab_id.to_string()));
        }
        self.active_tab_id = Some(tab_id.to_string());
        Ok(())
    }

    fn get_tab(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    fn get_all_tabs(&self) -> Vec<&Tab> {
        // Tab strip order, not creation order
        self.tab_order
            .iter()
            .filter_map(|id| self.tabs.iter().find(|t| t.id == *id))
            .collect()
    }

    fn get_active_tab(&self) -> Option<&Tab> {
        self.active_tab_id
            .as_ref()
            .and_then(|id| self.tabs.iter().find(|t| t.id == *id))
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn get_tab_order(&self) -> &[String] {
        &self.tab_order
    }

    fn update_tab_url(&mut self, tab_id: &str, url: &str) -> Result<(), TabError> {
        self.tab_mut(tab_id)?.url = url.to_string();
        Ok(())
    }

    fn update_tab_title(&mut self, tab_id: &str, title: &str) -> Result<(), TabError> {
        self.tab_mut(tab_id)?.title = title.to_string();
        Ok(())
    }
}
