//! Host-facing surfaces the controllers are generic over.
//!
//! The native host process owns window manipulation, file enumeration,
//! autostart registration and process launching; the controllers only see
//! these three traits. The production implementation lives in `ledge-rpc`
//! (`ShelfBridge`); tests substitute recording mocks.

use serde_json::Value;

/// Errors crossing the bridge boundary, classified by cause.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BridgeError {
    /// The bridge could not deliver the call at all.
    #[error("bridge unreachable: {0}")]
    Unreachable(String),

    /// The backend executed the command and reported failure.
    #[error("command {method} failed: {message}")]
    Command { method: String, message: String },

    /// The backend replied with a result of an unexpected shape.
    #[error("malformed payload from {method}: {detail}")]
    MalformedPayload { method: String, detail: String },
}

/// The backend command table, treated as an opaque RPC boundary.
///
/// `get_files` returns raw enumeration rows; schema validation happens in
/// [`crate::FileShelfModel`] so a single malformed row never aborts a
/// refresh.
pub trait CommandBridge {
    fn expand_window(&self) -> impl Future<Output = Result<(), BridgeError>>;
    fn roll_up_window(&self) -> impl Future<Output = Result<(), BridgeError>>;
    fn fix_window(&self) -> impl Future<Output = Result<(), BridgeError>>;
    fn close_window(&self) -> impl Future<Output = Result<(), BridgeError>>;
    fn get_files(&self) -> impl Future<Output = Result<Vec<Value>, BridgeError>>;
    fn run_app(&self, path_handle: &str) -> impl Future<Output = Result<(), BridgeError>>;
    fn save_changes(&self) -> impl Future<Output = Result<(), BridgeError>>;
}

/// The host window surface: decoration state and title, queried and
/// mutated directly rather than via the command table.
pub trait WindowSurface {
    fn is_decorated(&self) -> impl Future<Output = Result<bool, BridgeError>>;
    fn title(&self) -> impl Future<Output = Result<String, BridgeError>>;
    fn set_title(&self, title: &str) -> impl Future<Output = Result<(), BridgeError>>;
}

/// The host autostart registration surface.
pub trait AutostartSurface {
    fn is_enabled(&self) -> impl Future<Output = Result<bool, BridgeError>>;
    fn enable(&self) -> impl Future<Output = Result<(), BridgeError>>;
}
