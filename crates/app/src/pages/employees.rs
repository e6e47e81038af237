//! `/dashboard/employees`
//!
//! Listing and the reset-password action are limited to staff managers.

use crmdesk_core::validation::require;
use crmdesk_core::views::filters::filter_text;
use crmdesk_core::View;
use crmdesk_domain::{CrmError, Employee};
use tracing::instrument;

use super::track;
use crate::context::AppContext;
use crate::render::{opt, Table};
use crate::routes::Route;

pub struct EmployeesPage {
    view: View<Vec<Employee>>,
    query: String,
}

impl EmployeesPage {
    pub fn new(ctx: &AppContext) -> Self {
        Self { view: View::new("employees", ctx.notifier()), query: String::new() }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub async fn load(&mut self, ctx: &AppContext) -> bool {
        track(Route::Employees, "load", self.view.load(ctx.crm.employees())).await
    }

    pub fn view(&self) -> &View<Vec<Employee>> {
        &self.view
    }

    pub fn visible(&self) -> Vec<&Employee> {
        filter_text(self.view.data(), &self.query)
    }

    /// Set a new password for `user_id`, then reload.
    #[instrument(skip(self, ctx, password))]
    pub async fn reset_password(&mut self, ctx: &AppContext, user_id: &str, password: &str) -> bool {
        if !ctx.can_manage_staff() {
            self.view.reject(&CrmError::Auth("You are not allowed to reset passwords".into()));
            return false;
        }
        if let Err(err) = require("User", user_id).and_then(|()| require("Password", password)) {
            self.view.reject(&err);
            return false;
        }

        let action = ctx.crm.reset_password(user_id, password);
        let done = track(Route::Employees, "reset_password", async {
            self.view.perform(action, Some("Password reset")).await.is_some()
        })
        .await;

        if done {
            self.load(ctx).await;
        }
        done
    }

    pub fn render(&self, limit: usize) -> String {
        let mut table =
            Table::new(["ID", "Name", "Email", "Department", "Designation", "Role", "Status"]);
        for employee in self.visible() {
            table.row([
                employee.id.clone(),
                employee.name.clone(),
                employee.email.clone(),
                opt(employee.department.as_ref()),
                opt(employee.designation.as_ref()),
                employee.role.to_string(),
                opt(employee.status.as_ref()),
            ]);
        }
        table.render(limit, "No employees found")
    }
}
