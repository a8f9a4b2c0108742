//! Tests for the context menu adapter.

use ledge_types::MenuAction;

use crate::ContextMenuAdapter;
use crate::tests::fixtures::MockBridge;

#[tokio::test]
async fn test_descriptor_always_has_exactly_two_items() {
    let adapter = ContextMenuAdapter::new(MockBridge::new(), "dark");

    for _ in 0..10 {
        let descriptor = adapter.descriptor();
        assert_eq!(descriptor.theme, "dark");
        assert_eq!(descriptor.items.len(), 2);
        assert_eq!(descriptor.items[0].label, "Fixed tab");
        assert_eq!(descriptor.items[1].label, "Close tab");
        assert!(descriptor.items.iter().all(|item| !item.disabled));
    }
}

#[tokio::test]
async fn test_descriptor_actions_match_labels() {
    let adapter = ContextMenuAdapter::new(MockBridge::new(), "dark");

    let descriptor = adapter.descriptor();
    assert_eq!(descriptor.items[0].event, MenuAction::FixWindow);
    assert_eq!(descriptor.items[1].event, MenuAction::CloseWindow);
}

#[tokio::test]
async fn test_activate_fix_window() {
    let bridge = MockBridge::new();
    let adapter = ContextMenuAdapter::new(bridge.clone(), "dark");

    adapter.activate(MenuAction::FixWindow).await;

    assert_eq!(bridge.commands(), vec!["fix_window"]);
}

#[tokio::test]
async fn test_activate_close_window() {
    let bridge = MockBridge::new();
    let adapter = ContextMenuAdapter::new(bridge.clone(), "dark");

    adapter.activate(MenuAction::CloseWindow).await;

    assert_eq!(bridge.commands(), vec!["close_window"]);
}

#[tokio::test]
async fn test_activate_failure_is_absorbed() {
    let bridge = MockBridge::new();
    bridge.fail_on("fix_window");
    let adapter = ContextMenuAdapter::new(bridge.clone(), "dark");

    adapter.activate(MenuAction::FixWindow).await;
    adapter.activate(MenuAction::CloseWindow).await;

    assert_eq!(bridge.commands(), vec!["fix_window", "close_window"]);
}

#[tokio::test]
async fn test_configured_theme_flows_into_descriptor() {
    let adapter = ContextMenuAdapter::new(MockBridge::new(), "light");
    assert_eq!(adapter.descriptor().theme, "light");
}
