//! Shared fixtures for the app integration tests

#![allow(dead_code)]

use std::sync::Arc;

use crmdesk_core::{KeyValueStore, Notification};
use crmdesk_domain::constants::{TOKEN_KEY, USER_KEY};
use crmdesk_domain::{ApiConfig, Config};
use crmdesk_infra::MemoryKeyValueStore;
use crmdesk_lib::AppContext;
use serde_json::json;
use wiremock::MockServer;

pub fn config(server: &MockServer) -> Config {
    Config {
        api: ApiConfig { base_url: server.uri(), user_agent: None },
        ..Config::default()
    }
}

/// Context with nothing stored.
pub fn signed_out(server: &MockServer) -> (AppContext, Arc<MemoryKeyValueStore>) {
    let store = Arc::new(MemoryKeyValueStore::new());
    let ctx = AppContext::new_with_store(config(server), store.clone())
        .expect("context should build");
    (ctx, store)
}

/// Context whose store already holds a session for `role`.
pub fn signed_in(server: &MockServer, role: &str) -> (AppContext, Arc<MemoryKeyValueStore>) {
    let store = Arc::new(MemoryKeyValueStore::new());
    store.set(TOKEN_KEY, "tok-1").expect("token should store");
    store
        .set(
            USER_KEY,
            &json!({"id": "u-1", "name": "Meera Nair", "email": "meera@example.com", "role": role})
                .to_string(),
        )
        .expect("user should store");

    let ctx = AppContext::new_with_store(config(server), store.clone())
        .expect("context should build");
    (ctx, store)
}

pub fn toasts(ctx: &AppContext) -> Vec<Notification> {
    ctx.toasts.drain()
}
