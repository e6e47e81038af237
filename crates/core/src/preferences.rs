//! Sidebar collapsed preference
//!
//! The value is persisted under a fixed key as `"true"`/`"false"`. Changes
//! made in this process are broadcast on a watch channel so every mounted
//! view picks them up on its next poll without re-reading storage. Writes
//! from other processes are only seen after [`SidebarPreference::sync`].

use std::sync::Arc;

use crmdesk_domain::constants::SIDEBAR_COLLAPSED_KEY;
use crmdesk_domain::Result;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::storage::KeyValueStore;

/// Persisted, observable sidebar state
pub struct SidebarPreference {
    store: Arc<dyn KeyValueStore>,
    sender: watch::Sender<bool>,
}

impl SidebarPreference {
    /// Load the stored value (default: expanded).
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let initial = read_flag(store.as_ref());
        let (sender, _) = watch::channel(initial);
        Self { store, sender }
    }

    pub fn is_collapsed(&self) -> bool {
        *self.sender.borrow()
    }

    /// Persist and broadcast a new value.
    ///
    /// # Errors
    ///
    /// Returns a storage error; subscribers are not notified in that case.
    pub fn set_collapsed(&self, collapsed: bool) -> Result<()> {
        self.store.set(SIDEBAR_COLLAPSED_KEY, if collapsed { "true" } else { "false" })?;
        self.sender.send_replace(collapsed);
        debug!(collapsed, "sidebar preference updated");
        Ok(())
    }

    /// Flip the value and return the new state.
    ///
    /// # Errors
    ///
    /// See [`SidebarPreference::set_collapsed`].
    pub fn toggle(&self) -> Result<bool> {
        let next = !self.is_collapsed();
        self.set_collapsed(next)?;
        Ok(next)
    }

    /// Receiver for a mounted view.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.sender.subscribe()
    }

    /// Re-read storage and broadcast if another writer changed it.
    ///
    /// Returns whether the value changed.
    pub fn sync(&self) -> bool {
        let stored = read_flag(self.store.as_ref());
        self.sender.send_if_modified(|current| {
            if *current == stored {
                false
            } else {
                *current = stored;
                true
            }
        })
    }
}

fn read_flag(store: &dyn KeyValueStore) -> bool {
    match store.get(SIDEBAR_COLLAPSED_KEY) {
        Ok(Some(raw)) => raw.trim() == "true",
        Ok(None) => false,
        Err(err) => {
            warn!(error = %err, "failed to read sidebar preference; using default");
            false
        }
    }
}
