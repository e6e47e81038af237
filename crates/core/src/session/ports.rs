//! Port interfaces for authentication
//!
//! These traits define the boundaries between the session logic and the
//! infrastructure that talks to the backend.

use async_trait::async_trait;
use crmdesk_domain::{AuthResponse, Credentials, Registration, Result};

/// Backend auth endpoints
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for a token and profile
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse>;

    /// Create an account and sign it in
    async fn register(&self, registration: &Registration) -> Result<AuthResponse>;
}

/// Source of the bearer token attached to outgoing requests
///
/// `None` means the request goes out unauthenticated.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> Option<String>;
}
