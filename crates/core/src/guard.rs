//! Auth guard for protected views
//!
//! Two states: `Checking` (initial) and `Ready`. A check without a token
//! redirects to the login route and leaves the guard in `Checking`, so the
//! protected content never renders. A check with a token moves to `Ready`.
//!
//! Presence is all that is checked: the token is not validated against the
//! server and expiry is not inspected. A revoked token surfaces as a failed
//! request on the page itself.

use crmdesk_domain::constants::LOGIN_ROUTE;
use tracing::debug;

use crate::session::SessionContext;

/// Guard lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Checking,
    Ready,
}

/// What the caller should do after a check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    Redirect(String),
}

/// Gate in front of protected content
#[derive(Debug, Clone)]
pub struct AuthGuard {
    session: SessionContext,
    state: GuardState,
    login_route: String,
}

impl AuthGuard {
    pub fn new(session: SessionContext) -> Self {
        Self { session, state: GuardState::Checking, login_route: LOGIN_ROUTE.to_string() }
    }

    /// Redirect somewhere other than the default login route.
    pub fn with_login_route(mut self, route: impl Into<String>) -> Self {
        self.login_route = route.into();
        self
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Run the mount-time check.
    ///
    /// Once `Ready`, the guard stays ready for its lifetime; it does not
    /// re-check when the token later disappears.
    pub fn check(&mut self) -> GuardOutcome {
        if self.state == GuardState::Ready {
            return GuardOutcome::Render;
        }

        if self.session.is_authenticated() {
            self.state = GuardState::Ready;
            GuardOutcome::Render
        } else {
            debug!(redirect = %self.login_route, "no session token; redirecting");
            GuardOutcome::Redirect(self.login_route.clone())
        }
    }

    /// Check, then produce the children only when ready.
    ///
    /// Returns `Err(route)` with the redirect target otherwise; `children`
    /// is not invoked in that case.
    pub fn render<R>(&mut self, children: impl FnOnce() -> R) -> Result<R, String> {
        match self.check() {
            GuardOutcome::Render => Ok(children()),
            GuardOutcome::Redirect(route) => Err(route),
        }
    }
}

#[cfg(test)]
mod tests {
    use crmdesk_domain::{Role, UserProfile};

    use super::*;
    use crate::session::Session;

    fn signed_in() -> SessionContext {
        let ctx = SessionContext::new();
        ctx.begin(Session::new(
            "tok",
            UserProfile {
                id: "u1".into(),
                name: "Asha".into(),
                email: "asha@example.com".into(),
                role: Role::Admin,
            },
        ));
        ctx
    }

    #[test]
    fn redirects_without_token_and_stays_checking() {
        let mut guard = AuthGuard::new(SessionContext::new());
        let mut rendered = false;

        let result = guard.render(|| rendered = true);

        assert_eq!(result, Err(LOGIN_ROUTE.to_string()));
        assert!(!rendered);
        assert_eq!(guard.state(), GuardState::Checking);
    }

    #[test]
    fn renders_with_token() {
        let mut guard = AuthGuard::new(signed_in());
        assert_eq!(guard.render(|| "content"), Ok("content"));
        assert_eq!(guard.state(), GuardState::Ready);
    }

    #[test]
    fn ready_guard_does_not_recheck() {
        let ctx = signed_in();
        let mut guard = AuthGuard::new(ctx.clone());
        assert_eq!(guard.check(), GuardOutcome::Render);

        ctx.invalidate();

        assert_eq!(guard.check(), GuardOutcome::Render);
        let mut fresh = AuthGuard::new(ctx);
        assert_eq!(fresh.check(), GuardOutcome::Redirect(LOGIN_ROUTE.to_string()));
    }

    #[test]
    fn custom_login_route() {
        let mut guard = AuthGuard::new(SessionContext::new()).with_login_route("/signin");
        assert_eq!(guard.check(), GuardOutcome::Redirect("/signin".into()));
    }
}
