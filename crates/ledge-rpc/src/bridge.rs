//! `ShelfBridge`: the production implementation of the host surfaces.
//!
//! Wraps an [`RpcClient`] and implements the ledge-core traits by issuing
//! the corresponding RPC methods, translating transport failures into the
//! core error taxonomy: delivery problems become `Unreachable`, host-side
//! failures become `Command`, result-shape problems become
//! `MalformedPayload`.

use ledge_core::{AutostartSurface, BridgeError, CommandBridge, WindowSurface};
use ledge_types::MenuDescriptor;
use serde_json::Value;

use crate::client::{ClientError, RpcClient};
use crate::helpers::menu_reply;
use crate::protocol::{RunAppParams, SetTitleParams, methods};

fn bridge_error(method: &str, err: ClientError) -> BridgeError {
    match err {
        ClientError::Rpc { code, message } => BridgeError::Command {
            method: method.to_string(),
            message: format!("{message} (code {code})"),
        },
        ClientError::Json(e) => BridgeError::MalformedPayload {
            method: method.to_string(),
            detail: e.to_string(),
        },
        ClientError::UnexpectedResponse => BridgeError::MalformedPayload {
            method: method.to_string(),
            detail: "unexpected response shape".to_string(),
        },
        other => BridgeError::Unreachable(other.to_string()),
    }
}

pub struct ShelfBridge {
    client: RpcClient,
}

impl ShelfBridge {
    #[must_use]
    pub fn new(client: RpcClient) -> Self {
        Self { client }
    }

    async fn call<T: serde::de::DeserializeOwned>(
        &self,
        method: &str,
        params: Option<Value>,
    ) -> Result<T, BridgeError> {
        self.client
            .request(method, params)
            .await
            .map_err(|e| bridge_error(method, e))
    }

    async fn call_void(&self, method: &str, params: Option<Value>) -> Result<(), BridgeError> {
        let _: Value = self.call(method, params).await?;
        Ok(())
    }

    /// Answer a context-menu request with the menu descriptor.
    ///
    /// # Errors
    ///
    /// Returns `Unreachable` when the reply cannot be delivered.
    pub async fn send_menu_reply(&self, descriptor: &MenuDescriptor) -> Result<(), BridgeError> {
        let notification = menu_reply(descriptor);
        self.client
            .notify(&notification.method, notification.params)
            .await
            .map_err(|e| bridge_error(methods::CONTEXT_MENU_REPLY, e))
    }
}

impl CommandBridge for ShelfBridge {
    async fn expand_window(&self) -> Result<(), BridgeError> {
        self.call_void(methods::EXPAND_WINDOW, None).await
    }

    async fn roll_up_window(&self) -> Result<(), BridgeError> {
        self.call_void(methods::ROLL_UP_WINDOW, None).await
    }

    async fn fix_window(&self) -> Result<(), BridgeError> {
        self.call_void(methods::FIX_WINDOW, None).await
    }

    async fn close_window(&self) -> Result<(), BridgeError> {
        self.call_void(methods::CLOSE_WINDOW, None).await
    }

    async fn get_files(&self) -> Result<Vec<Value>, BridgeError> {
        self.call(methods::GET_FILES, None).await
    }

    async fn run_app(&self, path_handle: &str) -> Result<(), BridgeError> {
        let params = serde_json::to_value(RunAppParams {
            path_handle: path_handle.to_string(),
        })
        .map_err(|e| bridge_error(methods::RUN_APP, ClientError::Json(e)))?;
        self.call_void(methods::RUN_APP, Some(params)).await
    }

    async fn save_changes(&self) -> Result<(), BridgeError> {
        self.call_void(methods::SAVE_CHANGES, None).await
    }
}

impl WindowSurface for ShelfBridge {
    async fn is_decorated(&self) -> Result<bool, BridgeError> {
        self.call(methods::WINDOW_IS_DECORATED, None).await
    }

    async fn title(&self) -> Result<String, BridgeError> {
        self.call(methods::WINDOW_GET_TITLE, None).await
    }

    async fn set_title(&self, title: &str) -> Result<(), BridgeError> {
        let params = serde_json::to_value(SetTitleParams {
            title: title.to_string(),
        })
        .map_err(|e| bridge_error(methods::WINDOW_SET_TITLE, ClientError::Json(e)))?;
        self.call_void(methods::WINDOW_SET_TITLE, Some(params)).await
    }
}

impl AutostartSurface for ShelfBridge {
    async fn is_enabled(&self) -> Result<bool, BridgeError> {
        self.call(methods::AUTOSTART_IS_ENABLED, None).await
    }

    async fn enable(&self) -> Result<(), BridgeError> {
        self.call_void(methods::AUTOSTART_ENABLE, None).await
    }
}
