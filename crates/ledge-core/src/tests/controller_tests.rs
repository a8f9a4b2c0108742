//! Tests for hover-driven expand/collapse orchestration.

use std::sync::Arc;

use tokio::sync::Notify;
use tokio::task::yield_now;

use crate::tests::fixtures::{MockBridge, MockWindow, sample_row};
use crate::{FileShelfModel, WindowStateController};

fn build(
    bridge: &Arc<MockBridge>,
    window: &Arc<MockWindow>,
) -> WindowStateController<MockBridge, MockWindow> {
    let shelf = Arc::new(FileShelfModel::new(bridge.clone()));
    WindowStateController::new(bridge.clone(), window.clone(), shelf)
}

#[tokio::test]
async fn test_enter_on_undecorated_expands_then_refreshes() {
    let bridge = MockBridge::new();
    let controller = build(&bridge, &MockWindow::undecorated());

    controller.on_hover_enter().await;

    assert_eq!(bridge.commands(), vec!["expand_window", "get_files"]);
}

#[tokio::test]
async fn test_enter_on_decorated_is_noop() {
    let bridge = MockBridge::new();
    let controller = build(&bridge, &MockWindow::decorated());

    controller.on_hover_enter().await;

    assert!(bridge.commands().is_empty());
}

#[tokio::test]
async fn test_leave_on_undecorated_collapses() {
    let bridge = MockBridge::new();
    let controller = build(&bridge, &MockWindow::undecorated());

    controller.on_hover_leave().await;

    assert_eq!(bridge.commands(), vec!["roll_up_window"]);
}

#[tokio::test]
async fn test_leave_on_decorated_issues_zero_commands() {
    let bridge = MockBridge::new();
    let controller = build(&bridge, &MockWindow::decorated());

    controller.on_hover_leave().await;

    assert!(bridge.commands().is_empty());
}

#[tokio::test]
async fn test_expand_failure_skips_refresh_and_releases_lock() {
    let bridge = MockBridge::new();
    let controller = build(&bridge, &MockWindow::undecorated());

    bridge.fail_on("expand_window");
    controller.on_hover_enter().await;
    assert_eq!(bridge.commands(), vec!["expand_window"]);

    // The lock must be free again; a later leave still goes through.
    bridge.succeed_on("expand_window");
    controller.on_hover_leave().await;
    assert_eq!(bridge.commands(), vec!["expand_window", "roll_up_window"]);
}

#[tokio::test]
async fn test_decoration_query_failure_issues_no_commands() {
    let bridge = MockBridge::new();
    let window = MockWindow::undecorated();
    let controller = build(&bridge, &window);

    window.fail_queries();
    controller.on_hover_enter().await;
    controller.on_hover_leave().await;

    assert!(bridge.commands().is_empty());
}

#[tokio::test]
async fn test_leave_waits_for_pending_enter_sequence() {
    let bridge = MockBridge::new();
    bridge.set_rows(vec![sample_row("aWNvbg==", "Notes", "/handle/1")]);
    let controller = Arc::new(build(&bridge, &MockWindow::undecorated()));

    // Park the expand so the leave arrives mid-sequence.
    let gate = Arc::new(Notify::new());
    bridge.gate_expand(gate.clone());

    let release = async {
        // Let the enter grab the lock and park, and the leave queue up
        // behind it, before releasing the expand.
        for _ in 0..4 {
            yield_now().await;
        }
        gate.notify_one();
    };

    tokio::join!(
        controller.on_hover_enter(),
        controller.on_hover_leave(),
        release
    );

    // The collapse must not race ahead of the expand+refresh sequence.
    assert_eq!(
        bridge.commands(),
        vec!["expand_window", "get_files", "roll_up_window"]
    );
}

#[tokio::test]
async fn test_expand_collapse_counts_never_diverge_past_one() {
    let bridge = MockBridge::new();
    let controller = Arc::new(build(&bridge, &MockWindow::undecorated()));

    for _ in 0..5 {
        tokio::join!(controller.on_hover_enter(), controller.on_hover_leave());
        tokio::join!(controller.on_hover_leave(), controller.on_hover_enter());
    }

    let expands = bridge.count_of("expand_window");
    let collapses = bridge.count_of("roll_up_window");
    assert!(
        expands.abs_diff(collapses) <= 1,
        "expands={expands} collapses={collapses}"
    );
    // One refresh per successful expand, always.
    assert_eq!(bridge.count_of("get_files"), expands);
}

#[tokio::test]
async fn test_refresh_failure_keeps_window_interactive() {
    let bridge = MockBridge::new();
    let controller = build(&bridge, &MockWindow::undecorated());

    bridge.fail_on("get_files");
    controller.on_hover_enter().await;
    controller.on_hover_leave().await;

    assert_eq!(
        bridge.commands(),
        vec!["expand_window", "get_files", "roll_up_window"]
    );
}

#[tokio::test]
async fn test_open_entry_runs_app_with_handle() {
    let bridge = MockBridge::new();
    let controller = build(&bridge, &MockWindow::undecorated());

    controller.open_entry("/handle/7").await;

    assert_eq!(bridge.commands(), vec!["run_app /handle/7"]);
}

#[tokio::test]
async fn test_open_entry_failure_is_absorbed() {
    let bridge = MockBridge::new();
    let controller = build(&bridge, &MockWindow::undecorated());

    bridge.fail_on("run_app /handle/7");
    controller.open_entry("/handle/7").await;
    // Still usable afterwards.
    controller.on_hover_leave().await;
    assert_eq!(bridge.count_of("roll_up_window"), 1);
}
