//! Session service - login, registration, logout and profile lookup
//!
//! Persists the token and profile under fixed storage keys and mirrors them
//! into the shared [`SessionContext`]. A cached profile is only ever trusted
//! when its token is stored alongside it.

use std::sync::Arc;

use crmdesk_domain::constants::{TOKEN_KEY, USER_KEY};
use crmdesk_domain::{AuthResponse, CrmError, Credentials, Registration, Result, UserProfile};
use tracing::{debug, info, instrument, warn};

use super::context::{Session, SessionContext};
use super::ports::AuthGateway;
use crate::storage::KeyValueStore;

/// Outcome of reading the cached profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileLookup {
    /// Token and profile are both stored and the profile parses
    Present(UserProfile),
    /// No token, or no profile
    Absent,
    /// Token present but the profile cannot be read; callers should force a
    /// fresh login
    Corrupt(String),
}

impl ProfileLookup {
    /// Collapse to the profile, treating corrupt entries as absent.
    pub fn into_profile(self) -> Option<UserProfile> {
        match self {
            Self::Present(profile) => Some(profile),
            Self::Absent | Self::Corrupt(_) => None,
        }
    }
}

/// Session lifecycle over an auth gateway and a key-value store
pub struct SessionService {
    gateway: Arc<dyn AuthGateway>,
    store: Arc<dyn KeyValueStore>,
    context: SessionContext,
}

impl SessionService {
    /// Create a new session service
    pub fn new(
        gateway: Arc<dyn AuthGateway>,
        store: Arc<dyn KeyValueStore>,
        context: SessionContext,
    ) -> Self {
        Self { gateway, store, context }
    }

    /// Shared session handle (for the request client and guard)
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Sign in and persist the session.
    ///
    /// # Errors
    ///
    /// Returns the gateway error on rejected credentials, [`CrmError::Auth`]
    /// when the server answers without a token, or a storage error if the
    /// session cannot be persisted. No session is started in any of these
    /// cases.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile> {
        let credentials = Credentials { email: email.to_string(), password: password.to_string() };
        let response = self.gateway.login(&credentials).await?;
        let profile = self.establish(response)?;
        info!(user_id = %profile.id, role = %profile.role, "login succeeded");
        Ok(profile)
    }

    /// Create an account, then persist the returned session.
    ///
    /// # Errors
    ///
    /// Same as [`SessionService::login`].
    #[instrument(skip(self, registration), fields(email = %registration.email))]
    pub async fn register(&self, registration: &Registration) -> Result<UserProfile> {
        let response = self.gateway.register(registration).await?;
        let profile = self.establish(response)?;
        info!(user_id = %profile.id, "registration succeeded");
        Ok(profile)
    }

    /// Clear the persisted token and profile and invalidate the context.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the entries cannot be removed; the
    /// in-memory session is invalidated regardless.
    pub fn logout(&self) -> Result<()> {
        let had_session = self.context.invalidate();
        self.store.remove_many(&[TOKEN_KEY, USER_KEY])?;
        info!(had_session, "logged out");
        Ok(())
    }

    /// Read the cached profile.
    pub fn current_user(&self) -> ProfileLookup {
        match self.read_stored() {
            Ok(Some((_, profile))) => ProfileLookup::Present(profile),
            Ok(None) => ProfileLookup::Absent,
            Err(err) => {
                warn!(error = %err, "cached profile is unreadable");
                ProfileLookup::Corrupt(err.user_message())
            }
        }
    }

    /// The cached profile, or `None` if absent or unparsable.
    pub fn current_user_or_none(&self) -> Option<UserProfile> {
        self.current_user().into_profile()
    }

    /// Stored token, if any.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store cannot be read.
    pub fn token(&self) -> Result<Option<String>> {
        self.store.get(TOKEN_KEY)
    }

    /// Rebuild the in-memory session from storage (application start).
    pub fn restore(&self) -> ProfileLookup {
        match self.read_stored() {
            Ok(Some((token, profile))) => {
                self.context.begin(Session::new(token, profile.clone()));
                debug!(user_id = %profile.id, "session restored from storage");
                ProfileLookup::Present(profile)
            }
            Ok(None) => {
                self.context.invalidate();
                ProfileLookup::Absent
            }
            Err(err) => {
                self.context.invalidate();
                warn!(error = %err, "stored session is unreadable; not restoring");
                ProfileLookup::Corrupt(err.user_message())
            }
        }
    }

    fn establish(&self, response: AuthResponse) -> Result<UserProfile> {
        let AuthResponse { token, user } = response;
        if token.trim().is_empty() {
            warn!(user_id = %user.id, "auth response carried no token");
            return Err(CrmError::Auth("Login response did not include a session token".into()));
        }

        let serialized = serde_json::to_string(&user)
            .map_err(|e| CrmError::Internal(format!("failed to serialize profile: {e}")))?;

        self.store.set_many(&[(TOKEN_KEY, token.as_str()), (USER_KEY, serialized.as_str())])?;
        self.context.begin(Session::new(token, user.clone()));
        Ok(user)
    }

    /// `Ok(None)` when either entry is missing: a profile without its token
    /// is never trusted.
    fn read_stored(&self) -> Result<Option<(String, UserProfile)>> {
        let Some(token) = self.store.get(TOKEN_KEY)? else {
            return Ok(None);
        };
        let Some(raw) = self.store.get(USER_KEY)? else {
            return Ok(None);
        };

        let profile = serde_json::from_str::<UserProfile>(&raw)
            .map_err(|e| CrmError::Decode(format!("stored profile is not valid JSON: {e}")))?;
        Ok(Some((token, profile)))
    }
}
