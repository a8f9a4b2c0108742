//! JSON-RPC command bridge to the ledge host process.
//!
//! The native host owns window manipulation, file enumeration, autostart
//! registration and process launching; this crate is the wire between it
//! and the controllers in `ledge-core`.
//!
//! # Architecture
//!
//! - [`protocol`]: JSON-RPC 2.0 message types and the ledge method table
//! - [`transport`]: length-prefixed codec for message framing
//! - [`client`]: async client over the host Unix socket
//! - [`bridge`]: `ShelfBridge`, the production implementation of the
//!   ledge-core surface traits
//! - [`helpers`]: notification/event conversions
//!
//! # Example
//!
//! ```no_run
//! use ledge_rpc::{RpcClient, ShelfBridge};
//!
//! # async fn example() -> Result<(), ledge_rpc::ClientError> {
//! let client = RpcClient::connect().await?;
//! let bridge = ShelfBridge::new(client);
//! # Ok(())
//! # }
//! ```

pub mod bridge;
pub mod client;
pub mod helpers;
pub mod protocol;
pub mod transport;

pub use bridge::ShelfBridge;
pub use client::{ClientError, RpcClient, socket_path};
pub use helpers::{menu_reply, notification_to_host_event};
pub use protocol::{
    JSONRPC_VERSION, Message, Notification, Request, RequestId, Response, RpcError, methods,
};
pub use transport::{WireCodec, WireError};
