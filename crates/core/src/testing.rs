//! Test doubles shared by the unit tests of this crate

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use crmdesk_domain::{
    AuthResponse, CrmError, Credentials, Registration, Result, UserProfile,
};
use parking_lot::Mutex;

use crate::notify::{Notification, Notifier};
use crate::session::ports::AuthGateway;
use crate::storage::KeyValueStore;

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

pub struct FakeAuthGateway {
    outcome: std::result::Result<AuthResponse, String>,
}

impl FakeAuthGateway {
    pub fn accepting(token: &str, user: UserProfile) -> Self {
        Self { outcome: Ok(AuthResponse { token: token.to_string(), user }) }
    }

    pub fn rejecting(message: &str) -> Self {
        Self { outcome: Err(message.to_string()) }
    }

    fn respond(&self) -> Result<AuthResponse> {
        self.outcome.clone().map_err(CrmError::Api)
    }
}

#[async_trait]
impl AuthGateway for FakeAuthGateway {
    async fn login(&self, _credentials: &Credentials) -> Result<AuthResponse> {
        self.respond()
    }

    async fn register(&self, _registration: &Registration) -> Result<AuthResponse> {
        self.respond()
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().push(notification);
    }
}
