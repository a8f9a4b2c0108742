//! Native context menu registration and dispatch.
//!
//! The host suspends rendering until the `contextmenu` handler returns, so
//! [`ContextMenuAdapter::descriptor`] is synchronous and allocation-only.
//! Item activation comes back later as a separate event.

use std::sync::Arc;

use ledge_types::{MenuAction, MenuDescriptor, MenuItem};
use tracing::warn;

use crate::surface::CommandBridge;

/// Event name the handler is registered under, process-wide.
pub const CONTEXT_MENU_EVENT: &str = "contextmenu";

pub struct ContextMenuAdapter<B> {
    bridge: Arc<B>,
    theme: String,
}

impl<B: CommandBridge> ContextMenuAdapter<B> {
    pub fn new(bridge: Arc<B>, theme: impl Into<String>) -> Self {
        Self {
            bridge,
            theme: theme.into(),
        }
    }

    /// Build the menu descriptor: always exactly two enabled items.
    #[must_use]
    pub fn descriptor(&self) -> MenuDescriptor {
        MenuDescriptor {
            theme: self.theme.clone(),
            items: vec![
                MenuItem {
                    label: "Fixed tab".to_string(),
                    disabled: false,
                    event: MenuAction::FixWindow,
                    checked: Some(false),
                },
                MenuItem {
                    label: "Close tab".to_string(),
                    disabled: false,
                    event: MenuAction::CloseWindow,
                    checked: None,
                },
            ],
        }
    }

    /// Dispatch an activated item to the backend, with no arguments.
    pub async fn activate(&self, action: MenuAction) {
        let result = match action {
            MenuAction::FixWindow => self.bridge.fix_window().await,
            MenuAction::CloseWindow => self.bridge.close_window().await,
        };
        if let Err(e) = result {
            warn!("menu action {action:?} failed: {e}");
        }
    }
}
