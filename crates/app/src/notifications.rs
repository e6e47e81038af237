//! Toast queue
//!
//! Views push notifications here; the front end drains and displays them.
//! Every toast is also emitted as a tracing event.

use std::collections::VecDeque;

use crmdesk_core::{Notification, NotificationLevel, Notifier};
use parking_lot::Mutex;
use tracing::{error, info};

/// Bounded FIFO of pending toasts
#[derive(Debug)]
pub struct ToastQueue {
    pending: Mutex<VecDeque<Notification>>,
    capacity: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_capacity(32)
    }
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Oldest toasts are dropped once `capacity` is exceeded.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { pending: Mutex::new(VecDeque::new()), capacity: capacity.max(1) }
    }

    /// Take every pending toast, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.pending.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error => error!(message = %notification.message, "toast"),
            level => info!(%level, message = %notification.message, "toast"),
        }

        let mut pending = self.pending.lock();
        if pending.len() == self.capacity {
            pending.pop_front();
        }
        pending.push_back(notification);
    }
}
