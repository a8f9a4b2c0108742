//! Conversions between wire notifications and domain events.

use ledge_types::{HostEvent, MenuDescriptor};
use serde_json::Value;
use tracing::warn;

use crate::protocol::{Notification, methods};

/// Decode a host notification into a [`HostEvent`].
///
/// Returns `None` for notifications with a different method or with
/// params that do not match the event schema (logged and dropped, never
/// fatal).
#[must_use]
pub fn notification_to_host_event(notification: &Notification) -> Option<HostEvent> {
    if notification.method != methods::HOST_EVENT {
        return None;
    }
    let params = notification.params.clone().unwrap_or(Value::Null);
    match serde_json::from_value(params) {
        Ok(event) => Some(event),
        Err(e) => {
            warn!("undecodable host event: {e}");
            None
        }
    }
}

/// Build the notification answering a context-menu request.
///
/// # Panics
///
/// Never panics; `MenuDescriptor` serialization cannot fail.
#[must_use]
pub fn menu_reply(descriptor: &MenuDescriptor) -> Notification {
    let params = serde_json::to_value(descriptor).expect("menu descriptor is always serializable");
    Notification::new(methods::CONTEXT_MENU_REPLY, Some(params))
}
