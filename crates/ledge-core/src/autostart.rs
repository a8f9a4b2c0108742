//! One-shot autostart re-registration at launch.
//!
//! If autostart is already enabled, the enable command is re-issued to
//! repair a possibly stale OS-level registration; if disabled, the user's
//! choice is left alone. Failures of either call are absorbed silently.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::surface::AutostartSurface;

pub struct AutostartGuard<A> {
    autostart: Arc<A>,
    ran: AtomicBool,
}

impl<A: AutostartSurface> AutostartGuard<A> {
    pub fn new(autostart: Arc<A>) -> Self {
        Self {
            autostart,
            ran: AtomicBool::new(false),
        }
    }

    /// Run the registration check once per process; later calls no-op.
    pub async fn ensure(&self) {
        if self.ran.swap(true, Ordering::SeqCst) {
            return;
        }

        match self.autostart.is_enabled().await {
            Ok(true) => {
                if let Err(e) = self.autostart.enable().await {
                    debug!("autostart re-enable failed: {e}");
                }
            }
            Ok(false) => {
                debug!("autostart disabled, leaving registration alone");
            }
            Err(e) => {
                debug!("autostart query failed: {e}");
            }
        }
    }
}
