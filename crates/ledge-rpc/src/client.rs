//! RPC client for the ledge host process.
//!
//! Connects over a Unix socket, matches responses to requests through a
//! pending map, and forwards host notifications (UI events) to a channel.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};
use tokio::net::UnixStream;
use tokio::sync::{Mutex, mpsc, oneshot};
use tokio_util::codec::Framed;
use tracing::warn;

use crate::protocol::{Message, Notification, Request, RequestId, Response, RpcError};
use crate::transport::{WireCodec, WireError};

fn runtime_dir() -> PathBuf {
    std::env::var("XDG_RUNTIME_DIR").map_or_else(|_| std::env::temp_dir(), PathBuf::from)
}

/// Get the host socket path.
///
/// `$LEDGE_SOCKET` overrides; otherwise `$XDG_RUNTIME_DIR/ledge.sock`,
/// falling back to the system temp directory.
#[must_use]
pub fn socket_path() -> PathBuf {
    std::env::var("LEDGE_SOCKET").map_or_else(|_| runtime_dir().join("ledge.sock"), PathBuf::from)
}

/// Errors that can occur with the RPC client
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Wire error: {0}")]
    Wire(#[from] WireError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("RPC error: {code} - {message}")]
    Rpc { code: i32, message: String },

    #[error("Connection closed")]
    ConnectionClosed,

    #[error("Request timeout")]
    Timeout,

    #[error("Unexpected response type")]
    UnexpectedResponse,
}

impl From<RpcError> for ClientError {
    fn from(e: RpcError) -> Self {
        ClientError::Rpc {
            code: e.code,
            message: e.message,
        }
    }
}

type PendingRequest = oneshot::Sender<Result<Response, ClientError>>;
type Sink = SplitSink<Framed<UnixStream, WireCodec>, Message>;

/// RPC client for talking to the ledge host
pub struct RpcClient {
    sink: Arc<Mutex<Sink>>,
    pending: Arc<Mutex<HashMap<RequestId, PendingRequest>>>,
    next_id: AtomicU64,
    timeout: Duration,
    notifications: Option<mpsc::Receiver<Notification>>,
}

impl RpcClient {
    /// Connect to the host at the default socket path.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Io` if the socket connection fails.
    pub async fn connect() -> Result<Self, ClientError> {
        Self::connect_to(socket_path()).await
    }

    /// Connect to the host at a custom socket path.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Io` if the socket connection fails.
    pub async fn connect_to(path: PathBuf) -> Result<Self, ClientError> {
        let stream = UnixStream::connect(&path).await?;
        let (sink, mut stream) = Framed::new(stream, WireCodec::new()).split();

        let pending: Arc<Mutex<HashMap<RequestId, PendingRequest>>> =
            Arc::new(Mutex::new(HashMap::new()));
        let pending_reader = pending.clone();

        let (notification_tx, notification_rx) = mpsc::channel(64);

        tokio::spawn(async move {
            while let Some(result) = stream.next().await {
                match result {
                    Ok(Message::Response(response)) => {
                        let mut pending = pending_reader.lock().await;
                        if let Some(tx) = pending.remove(&response.id) {
                            let _ = tx.send(Ok(response));
                        } else {
                            warn!("response for unknown request id {}", response.id);
                        }
                    }
                    Ok(Message::Notification(notification)) => {
                        if notification_tx.send(notification).await.is_err() {
                            break;
                        }
                    }
                    Ok(Message::Request(request)) => {
                        // Requests without an id are notifications that the
                        // untagged decode classified as requests.
                        if request.id.is_none() {
                            let notification = Notification::new(request.method, request.params);
                            if notification_tx.send(notification).await.is_err() {
                                break;
                            }
                        } else {
                            warn!("unexpected request from host: {}", request.method);
                        }
                    }
                    Err(e) => {
                        let mut pending = pending_reader.lock().await;
                        for (_, tx) in pending.drain() {
                            let _ = tx.send(Err(ClientError::ConnectionClosed));
                        }
                        warn!("host connection lost: {e}");
                        break;
                    }
                }
            }
        });

        Ok(Self {
            sink: Arc::new(Mutex::new(sink)),
            pending,
            next_id: AtomicU64::new(1),
            timeout: Duration::from_secs(30),
            notifications: Some(notification_rx),
        })
    }

    /// Set the per-request delivery timeout. Issued commands are never
    /// cancelled on the host side; this only bounds the wait for a reply.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Take the host notification stream. Yields `None` after the first
    /// call.
    pub fn take_notifications(&mut self) -> Option<mpsc::Receiver<Notification>> {
        self.notifications.take()
    }

    /// Send an RPC request and wait for its response.
    ///
    /// # Errors
    ///
    /// Returns an error if sending fails, the reply times out, the host
    /// reports an RPC error, or the result does not deserialize.
    pub async fn request<T: serde::de::DeserializeOwned>(
        &self,
        method: &str,
        params: Option<serde_json::Value>,
    ) -> Result<T, ClientError> {
        let id = RequestId::Number(self.next_id.fetch_add(1, Ordering::SeqCst));
        let request = Request::new(method, params, id.clone());

        let (tx, rx) = oneshot::channel();
        self.pending.lock().await.insert(id.clone(), tx);

        {
            let mut sink = self.sink.lock().await;
            if let Err(e) = sink.send(Message::Request(request)).await {
                self.pending.lock().await.remove(&id);
                return Err(e.into());
            }
        }

        let response = match tokio::time::timeout(self.timeout, rx).await {
            Ok(Ok(response)) => response?,
            Ok(Err(_)) => return Err(ClientError::ConnectionClosed),
            Err(_) => {
                self.pending.lock().await.remove(&id);
                return Err(ClientError::Timeout);
            }
        };

        if let Some(error) = response.error {
            return Err(error.into());
        }

        let result = response.result.unwrap_or(serde_json::Value::Null);
        Ok(serde_json::from_value(result)?)
    }

    /// Send a notification (no response expected).
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Wire` if sending fails.
    pub async fn notify(
        &self,
        method: &str,
        params: Option<serde_json::Value>,
    ) -> Result<(), ClientError> {
        let notification = Notification::new(method, params);
        let mut sink = self.sink.lock().await;
        sink.send(Message::Notification(notification)).await?;
        Ok(())
    }
}
