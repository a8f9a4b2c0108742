//! Window expand/collapse orchestration.
//!
//! Hover enter and leave handlers run on the same cooperative event loop
//! but may interleave at await points, so every transition sequence is
//! serialized through a single-flight lock: a leave that arrives while an
//! enter's expand+refresh is still pending waits for the whole sequence
//! before it evaluates decoration state. This keeps a collapse from racing
//! ahead of an expand and caps the expand/collapse imbalance at one.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::shelf::FileShelfModel;
use crate::surface::{CommandBridge, WindowSurface};

pub struct WindowStateController<B, W> {
    bridge: Arc<B>,
    window: Arc<W>,
    shelf: Arc<FileShelfModel<B>>,
    /// Single-flight guard for expand/collapse/refresh sequences.
    transition: Mutex<()>,
}

impl<B: CommandBridge, W: WindowSurface> WindowStateController<B, W> {
    pub fn new(bridge: Arc<B>, window: Arc<W>, shelf: Arc<FileShelfModel<B>>) -> Self {
        Self {
            bridge,
            window,
            shelf,
            transition: Mutex::new(()),
        }
    }

    /// Pointer entered the widget: expand an undecorated window, then
    /// refresh the shelf. No-op for decorated (user-resized) windows.
    ///
    /// Never issues a collapse. All failures are non-fatal; the window
    /// stays in its last known decoration state and the lock is released
    /// on every exit path.
    pub async fn on_hover_enter(&self) {
        let _guard = self.transition.lock().await;

        let decorated = match self.window.is_decorated().await {
            Ok(decorated) => decorated,
            Err(e) => {
                warn!("decoration query failed, skipping expand: {e}");
                return;
            }
        };
        if decorated {
            debug!("hover enter on decorated window, auto-hide disabled");
            return;
        }

        if let Err(e) = self.bridge.expand_window().await {
            warn!("expand failed: {e}");
            return;
        }

        // Refresh only after a successful expand; a failed refresh keeps
        // the stale shelf rather than clearing it.
        if let Err(e) = self.shelf.refresh().await {
            warn!("shelf refresh failed, keeping previous entries: {e}");
        }
    }

    /// Pointer left the widget: collapse an undecorated window.
    ///
    /// Never issues an expand or a refresh. No-op for decorated windows.
    pub async fn on_hover_leave(&self) {
        let _guard = self.transition.lock().await;

        let decorated = match self.window.is_decorated().await {
            Ok(decorated) => decorated,
            Err(e) => {
                warn!("decoration query failed, skipping collapse: {e}");
                return;
            }
        };
        if decorated {
            return;
        }

        if let Err(e) = self.bridge.roll_up_window().await {
            warn!("collapse failed: {e}");
        }
    }

    /// Launch the file behind a shelf icon (icon double-click).
    pub async fn open_entry(&self, path_handle: &str) {
        if let Err(e) = self.bridge.run_app(path_handle).await {
            warn!("run_app failed for {path_handle}: {e}");
        }
    }

    pub fn shelf(&self) -> &FileShelfModel<B> {
        &self.shelf
    }
}
