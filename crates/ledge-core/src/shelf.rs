//! The shelf model: the ordered icon grid shown inside the widget.
//!
//! Entries are replaced wholesale on every refresh and published through a
//! watch channel, so observers never see a partial update. Enumeration
//! order comes straight from the backend and is preserved, not re-sorted.

use std::sync::Arc;

use ledge_types::{FileRecord, ShelfEntry};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::Result;
use crate::surface::CommandBridge;

pub struct FileShelfModel<B> {
    bridge: Arc<B>,
    entries: watch::Sender<Vec<ShelfEntry>>,
}

impl<B: CommandBridge> FileShelfModel<B> {
    pub fn new(bridge: Arc<B>) -> Self {
        let (entries, _) = watch::channel(Vec::new());
        Self { bridge, entries }
    }

    /// Re-fetch the file enumeration and replace the model.
    ///
    /// Malformed rows are rejected individually; the rest of the
    /// enumeration still lands. When the backend call itself fails the
    /// previous entries are retained (stale but available) and the error
    /// is returned for the caller to log.
    ///
    /// # Errors
    ///
    /// Returns the bridge error when the enumeration could not be fetched.
    pub async fn refresh(&self) -> Result<()> {
        let rows = self.bridge.get_files().await?;

        let mut next = Vec::with_capacity(rows.len());
        for row in &rows {
            match FileRecord::from_row(row) {
                Some(record) => next.push(ShelfEntry::from(record)),
                None => warn!("discarding malformed file row: {row}"),
            }
        }

        debug!("shelf refreshed: {} entries", next.len());
        self.entries.send_replace(next);
        Ok(())
    }

    /// Current entries, in backend enumeration order.
    #[must_use]
    pub fn entries(&self) -> Vec<ShelfEntry> {
        self.entries.borrow().clone()
    }

    /// Subscribe to model replacements for rendering.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<ShelfEntry>> {
        self.entries.subscribe()
    }
}
