//! Shared fixtures for the infra integration tests

#![allow(dead_code)]

use std::sync::Arc;

use crmdesk_core::{SessionContext, SessionService};
use crmdesk_infra::{
    ApiClient, ApiClientConfig, FileKeyValueStore, HttpAuthGateway, HttpCrmGateway,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::MockServer;

/// Full HTTP stack against a mock server, persisting to a temp file.
pub struct TestStack {
    pub context: SessionContext,
    pub sessions: SessionService,
    pub crm: HttpCrmGateway,
    pub store: Arc<FileKeyValueStore>,
    _dir: TempDir,
}

impl TestStack {
    pub fn new(server: &MockServer) -> Self {
        let dir = TempDir::new().expect("temp dir should be created");
        let store = Arc::new(
            FileKeyValueStore::open(dir.path().join("session.json")).expect("store should open"),
        );

        let context = SessionContext::new();
        let client = Arc::new(
            ApiClient::new(
                ApiClientConfig { base_url: server.uri(), user_agent: None },
                Arc::new(context.clone()),
            )
            .expect("client should build"),
        );

        let sessions = SessionService::new(
            Arc::new(HttpAuthGateway::new(client.clone())),
            store.clone(),
            context.clone(),
        );

        Self { context, sessions, crm: HttpCrmGateway::new(client), store, _dir: dir }
    }
}

pub fn auth_body(token: &str) -> Value {
    json!({
        "token": token,
        "user": {"_id": "u-1", "name": "Meera Nair", "email": "meera@example.com", "role": "manager"}
    })
}
