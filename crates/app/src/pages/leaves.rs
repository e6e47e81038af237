//! `/dashboard/leaves` and `/dashboard/leaves/pending`
//!
//! Approve and reject go through `PUT /leaves/{id}/status`; a successful
//! update reloads the list so the filter reflects the new status.

use crmdesk_core::views::aggregates::count_by;
use crmdesk_core::views::filters::leaves_with_status;
use crmdesk_core::View;
use crmdesk_domain::{LeaveRequest, LeaveStatus};
use tracing::instrument;

use super::track;
use crate::context::AppContext;
use crate::render::{cards, opt, Table};
use crate::routes::Route;

pub struct LeavesPage {
    route: Route,
    view: View<Vec<LeaveRequest>>,
    status: Option<LeaveStatus>,
}

impl LeavesPage {
    /// All requests, optionally narrowed by status.
    pub fn new(ctx: &AppContext) -> Self {
        Self { route: Route::Leaves, view: View::new("leaves", ctx.notifier()), status: None }
    }

    /// Requests still awaiting a decision.
    pub fn pending(ctx: &AppContext) -> Self {
        Self {
            route: Route::PendingLeaves,
            view: View::new("pending-leaves", ctx.notifier()),
            status: Some(LeaveStatus::Pending),
        }
    }

    pub fn with_status(mut self, status: Option<LeaveStatus>) -> Self {
        if self.route == Route::Leaves {
            self.status = status;
        }
        self
    }

    pub async fn load(&mut self, ctx: &AppContext) -> bool {
        track(self.route, "load", self.view.load(ctx.crm.leaves())).await
    }

    pub fn view(&self) -> &View<Vec<LeaveRequest>> {
        &self.view
    }

    pub fn visible(&self) -> Vec<&LeaveRequest> {
        match self.status {
            Some(status) => leaves_with_status(self.view.data(), status),
            None => self.view.data().iter().collect(),
        }
    }

    pub async fn approve(&mut self, ctx: &AppContext, leave_id: &str) -> bool {
        self.decide(ctx, leave_id, LeaveStatus::Approved).await
    }

    pub async fn reject(&mut self, ctx: &AppContext, leave_id: &str) -> bool {
        self.decide(ctx, leave_id, LeaveStatus::Rejected).await
    }

    #[instrument(skip(self, ctx), fields(route = %self.route))]
    async fn decide(&mut self, ctx: &AppContext, leave_id: &str, status: LeaveStatus) -> bool {
        let confirmation = format!("Leave request {}", status.as_str().to_lowercase());
        let action = ctx.crm.set_leave_status(leave_id, status);
        let updated = track(self.route, "set_status", async {
            self.view.perform(action, Some(confirmation.as_str())).await.is_some()
        })
        .await;

        if updated {
            self.load(ctx).await;
        }
        updated
    }

    pub fn render(&self, limit: usize) -> String {
        let counts = count_by(self.view.data(), |leave| leave.status);
        let summary = [
            ("Pending", counts.get(&LeaveStatus::Pending).copied().unwrap_or(0).to_string()),
            ("Approved", counts.get(&LeaveStatus::Approved).copied().unwrap_or(0).to_string()),
            ("Rejected", counts.get(&LeaveStatus::Rejected).copied().unwrap_or(0).to_string()),
        ];

        let mut table = Table::new(["ID", "Employee", "Type", "From", "To", "Reason", "Status"]);
        for leave in self.visible() {
            table.row([
                leave.id.clone(),
                leave.employee_name.clone(),
                leave.leave_type.clone(),
                leave.start_date.clone(),
                leave.end_date.clone(),
                opt(leave.reason.as_ref()),
                leave.status.to_string(),
            ]);
        }

        let empty = if self.status == Some(LeaveStatus::Pending) {
            "No pending leave requests"
        } else {
            "No leave requests"
        };
        format!("{}\n{}", cards(&summary), table.render(limit, empty))
    }
}
