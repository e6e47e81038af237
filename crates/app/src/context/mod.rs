//! Application context - dependency injection container

use std::sync::Arc;

use crmdesk_core::{
    AuthGuard, CrmGateway, KeyValueStore, Notifier, ProfileLookup, SessionContext,
    SessionService, SidebarPreference,
};
use crmdesk_domain::{Config, CrmError, Result, Role, UserProfile};
use crmdesk_infra::{ApiClient, FileKeyValueStore, HttpAuthGateway, HttpCrmGateway};
use tracing::{info, warn};

use crate::notifications::ToastQueue;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub store: Arc<dyn KeyValueStore>,
    pub session: SessionContext,
    pub sessions: Arc<SessionService>,
    pub crm: Arc<dyn CrmGateway>,
    pub sidebar: SidebarPreference,
    pub toasts: Arc<ToastQueue>,
}

impl AppContext {
    /// Wire everything against the configured backend and storage file, then
    /// restore any persisted session.
    ///
    /// # Errors
    ///
    /// Returns a config error for an unusable base URL and a storage error
    /// for an unusable storage path.
    pub fn new(config: Config) -> Result<Self> {
        let store = Arc::new(FileKeyValueStore::open(&config.storage.path)?);
        Self::new_with_store(config, store)
    }

    /// Same as [`AppContext::new`] with a caller-supplied store (tests,
    /// ephemeral sessions).
    ///
    /// # Errors
    ///
    /// Returns a config error for an unusable base URL.
    pub fn new_with_store(config: Config, store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let session = SessionContext::new();

        let client = Arc::new(
            ApiClient::new(config.api.clone().into(), Arc::new(session.clone()))
                .map_err(CrmError::from)?,
        );

        let sessions = Arc::new(SessionService::new(
            Arc::new(HttpAuthGateway::new(client.clone())),
            store.clone(),
            session.clone(),
        ));
        let crm: Arc<dyn CrmGateway> = Arc::new(HttpCrmGateway::new(client));
        let sidebar = SidebarPreference::new(store.clone());

        let ctx = Self {
            config,
            store,
            session,
            sessions,
            crm,
            sidebar,
            toasts: Arc::new(ToastQueue::new()),
        };
        ctx.restore_session()?;

        info!(base_url = %ctx.config.api.base_url, authenticated = ctx.session.is_authenticated(), "application context ready");
        Ok(ctx)
    }

    fn restore_session(&self) -> Result<()> {
        match self.sessions.restore() {
            ProfileLookup::Present(profile) => {
                info!(user_id = %profile.id, "resumed stored session");
            }
            ProfileLookup::Absent => {}
            ProfileLookup::Corrupt(reason) => {
                warn!(%reason, "stored session is unreadable; clearing it");
                self.sessions.logout()?;
            }
        }
        Ok(())
    }

    /// A fresh guard for one protected view.
    pub fn guard(&self) -> AuthGuard {
        AuthGuard::new(self.session.clone())
    }

    pub fn notifier(&self) -> Arc<dyn Notifier> {
        self.toasts.clone()
    }

    /// Signed-in profile, if any.
    pub fn current_user(&self) -> Option<UserProfile> {
        self.session.profile()
    }

    pub fn current_role(&self) -> Option<Role> {
        self.current_user().map(|profile| profile.role)
    }

    /// Whether the signed-in user may see staff records and reset passwords.
    pub fn can_manage_staff(&self) -> bool {
        self.current_role().is_some_and(|role| role.can_manage_staff())
    }
}
