//! Property-based tests for Tab Manager operations.
//!
//! These tests verify the tab create-close invariant: for any sequence of
//! tab creations, closures and switches, the count tracks correctly and
//! never drops below one once a tab has been opened.

use i2p_browser::managers::tab_manager::{TabManager, TabManagerTrait};
use i2p_browser::types::errors::TabError;
use proptest::prelude::*;

/// Operations that can be performed on the TabManager.
#[derive(Debug, Clone)]
enum TabOp {
    Create,
    Close(usize), // index into current tab_order to pick which tab to close
    Switch(usize),
}

/// Strategy for generating a sequence of tab operations.
/// Closes are weighted up so the last-tab refusal is hit often.
fn arb_tab_ops() -> impl Strategy<Value = Vec<TabOp>> {
    prop::collection::vec(
        prop_oneof![
            2 => Just(TabOp::Create),
            3 => (0..20usize).prop_map(TabOp::Close),
            1 => (0..20usize).prop_map(TabOp::Switch),
        ],
        1..60,
    )
}

// **Tab create-close invariant**
//
// *For any* sequence of operations starting from one open tab, `tab_count()`
// SHALL equal one plus creates minus successful closes, closing the only
// remaining tab SHALL fail with `LastTab`, and an active tab SHALL always
// exist.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn tab_create_close_invariant(ops in arb_tab_ops()) {
        let mut manager = TabManager::new();
        manager.create_tab("https://google.com/", "Home", true);
        let mut expected_count: usize = 1;

        for op in &ops {
            match op {
                TabOp::Create => {
                    manager.create_tab("https://google.com/", "New Tab", true);
                    expected_count += 1;
                }
                TabOp::Close(idx) => {
                    let order = manager.get_tab_order().to_vec();
                    let tab_id = order[idx % order.len()].clone();
                    let result = manager.close_tab(&tab_id);

                    if order.len() == 1 {
                        prop_assert!(matches!(result, Err(TabError::LastTab(_))));
                    } else {
                        prop_assert!(result.is_ok());
                        prop_assert!(manager.get_tab(&tab_id).is_none());
                        expected_count -= 1;
                    }
                }
                TabOp::Switch(idx) => {
                    let order = manager.get_tab_order().to_vec();
                    let tab_id = order[idx % order.len()].clone();
                    manager.switch_tab(&tab_id).unwrap();
                    prop_assert_eq!(&manager.get_active_tab().unwrap().id, &tab_id);
                }
            }

            prop_assert_eq!(manager.tab_count(), expected_count);
            prop_assert!(manager.tab_count() >= 1);
            prop_assert!(manager.get_active_tab().is_some());
            prop_assert_eq!(manager.get_tab_order().len(), manager.tab_count());
        }
    }
}
