//! Explicit session context
//!
//! A session is created at login, invalidated at logout, and shared by
//! handle with the request client (as its token provider) and the guard.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crmdesk_domain::UserProfile;
use parking_lot::RwLock;

use super::ports::AccessTokenProvider;

/// An authenticated session: token and profile always travel together
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    profile: UserProfile,
    started_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: impl Into<String>, profile: UserProfile) -> Self {
        Self { token: token.into(), profile, started_at: Utc::now() }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("profile", &self.profile)
            .field("started_at", &self.started_at)
            .finish()
    }
}

/// Shared handle to the current session, if any
#[derive(Clone, Default)]
pub struct SessionContext {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current session.
    pub fn begin(&self, session: Session) {
        *self.inner.write() = Some(session);
    }

    /// Drop the current session; returns whether one existed.
    pub fn invalidate(&self) -> bool {
        self.inner.write().take().is_some()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.inner.read().as_ref().map(|s| s.token.clone())
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.inner.read().as_ref().map(|s| s.profile.clone())
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext").field("session", &*self.inner.read()).finish()
    }
}

#[async_trait]
impl AccessTokenProvider for SessionContext {
    async fn access_token(&self) -> Option<String> {
        self.token()
    }
}
