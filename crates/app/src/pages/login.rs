//! `/auth/login`

use crmdesk_core::validation::{require, require_email};
use crmdesk_core::View;
use crmdesk_domain::UserProfile;
use tracing::instrument;

use super::track;
use crate::context::AppContext;
use crate::routes::Route;

pub struct LoginPage {
    view: View<()>,
}

impl LoginPage {
    pub fn new(ctx: &AppContext) -> Self {
        Self { view: View::new("login", ctx.notifier()) }
    }

    /// Sign in. Blank or malformed fields are rejected without a request.
    #[instrument(skip(self, ctx, password))]
    pub async fn submit(&mut self, ctx: &AppContext, email: &str, password: &str) -> Option<UserProfile> {
        if let Err(err) = require_email(email).and_then(|()| require("Password", password)) {
            self.view.reject(&err);
            return None;
        }

        let action = ctx.sessions.login(email.trim(), password);
        track(Route::Login, "submit", async {
            self.view.perform(action, Some("Signed in")).await
        })
        .await
    }

    pub fn render(&self) -> String {
        format!(
            "Sign in with `crmdesk login --email <email> --password <password>`.\nNo account yet? See {}.",
            Route::Register.path()
        )
    }
}
