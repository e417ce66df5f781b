use i2p_browser::managers::tab_manager::{TabManager, TabManagerTrait};
use i2p_browser::types::errors::TabError;

const HOME: &str = "https://google.com/";

#[test]
fn test_create_tab_returns_unique_ids() {
    let mut mgr = TabManager::new();
    let id1 = mgr.create_tab(HOME, "Home", true);
    let id2 = mgr.create_tab(HOME, "New Tab", false);
    assert_ne!(id1, id2);
    assert_eq!(mgr.tab_count(), 2);
}

#[test]
fn test_create_tab_sets_active_when_first() {
    let mut mgr = TabManager::new();
    let id = mgr.create_tab("https://example.com", "Example", false);
    // First tab should become active even if active=false
    assert_eq!(mgr.get_active_tab().unwrap().id, id);
}

#[test]
fn test_create_tab_stores_url_and_title() {
    let mut mgr = TabManager::new();
    let id = mgr.create_tab("https://geti2p.net", "I2P", true);
    let tab = mgr.get_tab(&id).unwrap();
    assert_eq!(tab.url, "https://geti2p.net");
    assert_eq!(tab.title, "I2P");
}

#[test]
fn test_inactive_create_keeps_current_tab() {
    let mut mgr = TabManager::new();
    let first = mgr.create_tab(HOME, "Home", true);
    mgr.create_tab(HOME, "Background", false);
    assert_eq!(mgr.get_active_tab().unwrap().id, first);
}

#[test]
fn test_tabs_listed_in_creation_order() {
    let mut mgr = TabManager::new();
    let ids: Vec<String> = (0..4).map(|i| mgr.create_tab(HOME, &format!("t{}", i), true)).collect();
    let listed: Vec<String> = mgr.get_all_tabs().iter().map(|t| t.id.clone()).collect();
    assert_eq!(listed, ids);
    assert_eq!(mgr.get_tab_order(), ids.as_slice());
}

#[test]
fn test_close_active_tab_activates_right_neighbor() {
    let mut mgr = TabManager::new();
    let id1 = mgr.create_tab(HOME, "1", true);
    let id2 = mgr.create_tab(HOME, "2", true);
    let id3 = mgr.create_tab(HOME, "3", false);

    mgr.switch_tab(&id2).unwrap();
    mgr.close_tab(&id2).unwrap();

    assert_eq!(mgr.get_active_tab().unwrap().id, id3);
    assert_eq!(mgr.get_tab_order(), &[id1, id3]);
}

#[test]
fn test_close_rightmost_active_tab_activates_left_neighbor() {
    let mut mgr = TabManager::new();
    let id1 = mgr.create_tab(HOME, "1", true);
    let id2 = mgr.create_tab(HOME, "2", true);

    mgr.close_tab(&id2).unwrap();

    assert_eq!(mgr.get_active_tab().unwrap().id, id1);
}

#[test]
fn test_close_background_tab_keeps_active() {
    let mut mgr = TabManager::new();
    let id1 = mgr.create_tab(HOME, "1", true);
    let id2 = mgr.create_tab(HOME, "2", false);

    mgr.close_tab(&id2).unwrap();

    assert_eq!(mgr.get_active_tab().unwrap().id, id1);
    assert_eq!(mgr.tab_count(), 1);
}

#[test]
fn test_close_last_tab_is_refused() {
    let mut mgr = TabManager::new();
    let id = mgr.create_tab(HOME, "Home", true);

    let result = mgr.close_tab(&id);

    assert!(matches!(result, Err(TabError::LastTab(ref t)) if *t == id));
    assert_eq!(mgr.tab_count(), 1, "The last tab must stay open");
    assert_eq!(mgr.get_active_tab().unwrap().id, id);
}

#[test]
fn test_close_unknown_tab() {
    let mut mgr = TabManager::new();
    mgr.create_tab(HOME, "Home", true);
    mgr.create_tab(HOME, "Other", true);
    assert!(matches!(mgr.close_tab("missing"), Err(TabError::NotFound(_))));
    assert_eq!(mgr.tab_count(), 2);
}

#[test]
fn test_switch_tab() {
    let mut mgr = TabManager::new();
    let id1 = mgr.create_tab(HOME, "1", true);
    mgr.create_tab(HOME, "2", true);

    mgr.switch_tab(&id1).unwrap();
    assert_eq!(mgr.get_active_tab().unwrap().id, id1);

    assert!(matches!(mgr.switch_tab("missing"), Err(TabError::NotFound(_))));
    assert_eq!(mgr.get_active_tab().unwrap().id, id1);
}

#[test]
fn test_update_url_and_title() {
    let mut mgr = TabManager::new();
    let id = mgr.create_tab(HOME, "Home", true);

    mgr.update_tab_url(&id, "http://example.com").unwrap();
    mgr.update_tab_title(&id, "Example Domain").unwrap();

    let tab = mgr.get_tab(&id).unwrap();
    assert_eq!(tab.url, "http://example.com");
    assert_eq!(tab.title, "Example Domain");

    assert!(mgr.update_tab_url("missing", "x").is_err());
    assert!(mgr.update_tab_title("missing", "x").is_err());
}

#[test]
fn test_empty_manager() {
    let mgr = TabManager::default();
    assert_eq!(mgr.tab_count(), 0);
    assert!(mgr.get_active_tab().is_none());
    assert!(mgr.get_all_tabs().is_empty());
}
