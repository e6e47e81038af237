//! `/auth/register`

use crmdesk_core::validation::{require, require_email};
use crmdesk_core::View;
use crmdesk_domain::{Registration, Result, UserProfile};
use tracing::instrument;

use super::track;
use crate::context::AppContext;
use crate::routes::Route;

pub struct RegisterPage {
    view: View<()>,
}

impl RegisterPage {
    pub fn new(ctx: &AppContext) -> Self {
        Self { view: View::new("register", ctx.notifier()) }
    }

    /// Create an account and sign in with it.
    #[instrument(skip(self, ctx, registration), fields(email = %registration.email))]
    pub async fn submit(&mut self, ctx: &AppContext, registration: Registration) -> Option<UserProfile> {
        if let Err(err) = validate(&registration) {
            self.view.reject(&err);
            return None;
        }

        let action = ctx.sessions.register(&registration);
        track(Route::Register, "submit", async {
            self.view.perform(action, Some("Account created")).await
        })
        .await
    }

    pub fn render(&self) -> String {
        format!(
            "Create an account with `crmdesk register --name <name> --email <email> --password <password> [--role <role>]`.\nAlready registered? See {}.",
            Route::Login.path()
        )
    }
}

fn validate(registration: &Registration) -> Result<()> {
    require("Name", &registration.name)?;
    require_email(&registration.email)?;
    require("Password", &registration.password)
}
