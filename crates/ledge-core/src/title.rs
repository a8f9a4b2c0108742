//! Editable window title state machine.
//!
//! Two states, two transitions: double-click takes `Display` to `Editing`,
//! Enter commits and returns to `Display`. There is deliberately no cancel
//! path (Escape changes nothing); the committed text is pushed to the host
//! window and persisted exactly once per commit.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::surface::{CommandBridge, WindowSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitleState {
    #[default]
    Display,
    Editing,
}

/// Result of a commit attempt, so the UI can show a transient indication
/// instead of silently losing a rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Title pushed to the window and persisted.
    Committed,
    /// Set-title or persist failed; editor returned to `Display` anyway.
    Failed,
    /// Not in `Editing`; nothing happened.
    Ignored,
}

pub struct TitleEditor<B, W> {
    bridge: Arc<B>,
    window: Arc<W>,
    state: TitleState,
    text: String,
}

impl<B: CommandBridge, W: WindowSurface> TitleEditor<B, W> {
    /// Build the editor in `Display`, seeded from the host window's
    /// current title. A failed title query seeds an empty buffer.
    pub async fn mount(bridge: Arc<B>, window: Arc<W>) -> Self {
        let text = match window.title().await {
            Ok(title) => title,
            Err(e) => {
                warn!("title query failed at mount, starting empty: {e}");
                String::new()
            }
        };
        Self {
            bridge,
            window,
            state: TitleState::Display,
            text,
        }
    }

    #[must_use]
    pub fn state(&self) -> TitleState {
        self.state
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Double-click: enter edit mode. No-op while already editing.
    pub fn begin_edit(&mut self) {
        if self.state == TitleState::Display {
            self.state = TitleState::Editing;
            debug!("title edit started");
        }
    }

    /// Replace the buffer with the current text content. Ignored outside
    /// of edit mode.
    pub fn input(&mut self, text: &str) {
        if self.state == TitleState::Editing {
            self.text = text.to_string();
        }
    }

    /// Enter: commit the edit. Empty text becomes the literal `"null"`,
    /// the result is pushed to the window title, and `save_changes` is
    /// issued exactly once. The editor returns to `Display` even when the
    /// backend calls fail.
    pub async fn commit(&mut self) -> CommitOutcome {
        if self.state != TitleState::Editing {
            return CommitOutcome::Ignored;
        }

        if self.text.is_empty() {
            self.text = "null".to_string();
        }
        self.state = TitleState::Display;

        if let Err(e) = self.window.set_title(&self.text).await {
            warn!("set_title failed: {e}");
            return CommitOutcome::Failed;
        }
        if let Err(e) = self.bridge.save_changes().await {
            warn!("title persist failed: {e}");
            return CommitOutcome::Failed;
        }

        debug!("title committed: {}", self.text);
        CommitOutcome::Committed
    }
}
