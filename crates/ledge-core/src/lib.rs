pub mod config;

mod autostart;
mod controller;
mod error;
mod menu;
mod shelf;
mod surface;
mod title;

#[cfg(test)]
mod tests;

pub use autostart::AutostartGuard;
pub use controller::WindowStateController;
pub use error::{Error, Result};
pub use menu::{CONTEXT_MENU_EVENT, ContextMenuAdapter};
pub use shelf::FileShelfModel;
pub use surface::{AutostartSurface, BridgeError, CommandBridge, WindowSurface};
pub use title::{CommitOutcome, TitleEditor, TitleState};

pub use ledge_types::*;
