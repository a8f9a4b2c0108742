//! Shared types for ledge components.
//!
//! This crate provides the types that cross the RPC boundary between the
//! widget controllers and the native host process: shelf entries, raw file
//! enumeration records, context-menu descriptors, and host UI events. All
//! types are serializable for RPC transport.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Prefix applied to backend-provided base64 PNG bytes to build a
/// rendering-ready image URI.
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// One row of the backend file enumeration, validated.
///
/// The host sends rows as loosely-typed JSON arrays
/// `[iconBase64, label, pathHandle]`; [`FileRecord::from_row`] turns one
/// row into a typed record or rejects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Base64-encoded PNG icon bytes, without any URI prefix.
    pub icon_base64: String,
    /// Display label (file stem, as chosen by the host).
    pub label: String,
    /// Opaque host-understood file reference. Not a portable path.
    pub path_handle: String,
}

impl FileRecord {
    /// Validate one raw enumeration row.
    ///
    /// Returns `None` when the row is not an array of at least three
    /// strings, so callers can reject malformed rows individually and keep
    /// the rest of an enumeration.
    #[must_use]
    pub fn from_row(row: &Value) -> Option<Self> {
        let fields = row.as_array()?;
        let icon_base64 = fields.first()?.as_str()?.to_string();
        let label = fields.get(1)?.as_str()?.to_string();
        let path_handle = fields.get(2)?.as_str()?.to_string();
        Some(Self {
            icon_base64,
            label,
            path_handle,
        })
    }
}

/// One icon cell of the shelf grid. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfEntry {
    /// Rendering-ready `data:image/png;base64,...` URI.
    pub icon_data_uri: String,
    pub label: String,
    /// Opaque host file reference, passed back verbatim to `run_app`.
    pub path_handle: String,
}

impl From<FileRecord> for ShelfEntry {
    fn from(record: FileRecord) -> Self {
        Self {
            icon_data_uri: format!("{PNG_DATA_URI_PREFIX}{}", record.icon_base64),
            label: record.label,
            path_handle: record.path_handle,
        }
    }
}

/// Actions the context menu can trigger on the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    FixWindow,
    CloseWindow,
}

/// One item of the native context menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub label: String,
    pub disabled: bool,
    /// Action dispatched when the item is activated.
    pub event: MenuAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

/// Menu descriptor returned to the host from the `contextmenu` handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuDescriptor {
    pub theme: String,
    pub items: Vec<MenuItem>,
}

/// UI events delivered by the host as RPC notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    /// Pointer entered the widget surface.
    PointerEntered,

    /// Pointer left the widget surface.
    PointerLeft,

    /// Title was double-clicked (requests edit mode).
    TitleDoubleClicked,

    /// Title text changed while editing.
    TitleInput { text: String },

    /// A key was pressed while the title has focus.
    KeyPressed { key: String },

    /// Right-click on the widget; host expects a menu descriptor reply.
    ContextMenuRequested,

    /// A context-menu item was activated.
    MenuItemActivated { action: MenuAction },

    /// A shelf icon was double-clicked.
    IconActivated { path_handle: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_file_record_from_valid_row() {
        let row = json!(["iVBORw0KGgo=", "Notes", "/handle/1"]);
        let record = FileRecord::from_row(&row).unwrap();
        assert_eq!(record.icon_base64, "iVBORw0KGgo=");
        assert_eq!(record.label, "Notes");
        assert_eq!(record.path_handle, "/handle/1");
    }

    #[test]
    fn test_file_record_rejects_short_row() {
        let row = json!(["iVBORw0KGgo=", "Notes"]);
        assert!(FileRecord::from_row(&row).is_none());
    }

    #[test]
    fn test_file_record_rejects_non_string_field() {
        let row = json!(["iVBORw0KGgo=", 42, "/handle/1"]);
        assert!(FileRecord::from_row(&row).is_none());
    }

    #[test]
    fn test_file_record_rejects_non_array() {
        let row = json!({"icon": "iVBORw0KGgo="});
        assert!(FileRecord::from_row(&row).is_none());
    }

    #[test]
    fn test_file_record_ignores_extra_fields() {
        let row = json!(["abc", "Doc", "/handle/2", "extra"]);
        let record = FileRecord::from_row(&row).unwrap();
        assert_eq!(record.label, "Doc");
    }

    #[test]
    fn test_shelf_entry_prefixes_data_uri() {
        let record = FileRecord {
            icon_base64: "iVBORw0KGgo=".to_string(),
            label: "Notes".to_string(),
            path_handle: "/handle/1".to_string(),
        };
        let entry = ShelfEntry::from(record);
        assert_eq!(entry.icon_data_uri, "data:image/png;base64,iVBORw0KGgo=");
        assert_eq!(entry.label, "Notes");
        assert_eq!(entry.path_handle, "/handle/1");
    }

    #[test]
    fn test_menu_action_serde() {
        let json = serde_json::to_string(&MenuAction::FixWindow).unwrap();
        assert_eq!(json, "\"fix_window\"");
        let back: MenuAction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MenuAction::FixWindow);
    }

    #[test]
    fn test_menu_descriptor_serde() {
        let descriptor = MenuDescriptor {
            theme: "dark".to_string(),
            items: vec![MenuItem {
                label: "Close tab".to_string(),
                disabled: false,
                event: MenuAction::CloseWindow,
                checked: None,
            }],
        };
        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["theme"], "dark");
        assert_eq!(json["items"][0]["label"], "Close tab");
        assert_eq!(json["items"][0]["event"], "close_window");
        assert!(json["items"][0].get("checked").is_none());
    }

    #[test]
    fn test_host_event_tagged_serde() {
        let event: HostEvent =
            serde_json::from_value(json!({"type": "pointer_entered"})).unwrap();
        assert_eq!(event, HostEvent::PointerEntered);

        let event: HostEvent =
            serde_json::from_value(json!({"type": "title_input", "text": "Projects"})).unwrap();
        assert_eq!(
            event,
            HostEvent::TitleInput {
                text: "Projects".to_string()
            }
        );

        let event: HostEvent = serde_json::from_value(
            json!({"type": "menu_item_activated", "action": "close_window"}),
        )
        .unwrap();
        assert_eq!(
            event,
            HostEvent::MenuItemActivated {
                action: MenuAction::CloseWindow
            }
        );
    }

    #[test]
    fn test_host_event_icon_activated_round_trip() {
        let event = HostEvent::IconActivated {
            path_handle: "/handle/3".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "icon_activated");
        let back: HostEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
