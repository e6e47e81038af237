//! `/dashboard/warehouse/returns`

use crmdesk_core::validation::{require, require_positive};
use crmdesk_core::View;
use crmdesk_domain::{NewReturn, Result, ReturnRecord};
use tracing::instrument;

use super::track;
use crate::context::AppContext;
use crate::render::{opt, Table};
use crate::routes::Route;

pub struct ReturnsPage {
    view: View<Vec<ReturnRecord>>,
}

impl ReturnsPage {
    pub fn new(ctx: &AppContext) -> Self {
        Self { view: View::new("returns", ctx.notifier()) }
    }

    pub async fn load(&mut self, ctx: &AppContext) -> bool {
        track(Route::Returns, "load", self.view.load(ctx.crm.returns())).await
    }

    pub fn view(&self) -> &View<Vec<ReturnRecord>> {
        &self.view
    }

    /// File a return. Invalid input is rejected locally without a request.
    /// Returns the created record and reloads on success.
    #[instrument(skip(self, ctx, request), fields(item_id = %request.item_id))]
    pub async fn create(&mut self, ctx: &AppContext, request: NewReturn) -> Option<ReturnRecord> {
        if let Err(err) = validate(&request) {
            self.view.reject(&err);
            return None;
        }

        let action = ctx.crm.create_return(&request);
        let created = track(Route::Returns, "create", async {
            self.view.perform(action, Some("Return recorded")).await
        })
        .await;

        if created.is_some() {
            self.load(ctx).await;
        }
        created
    }

    pub fn render(&self, limit: usize) -> String {
        let mut table = Table::new(["Item", "Qty", "Reason", "Challan", "Filed"]);
        for record in self.view.data() {
            table.row([
                if record.item_name.is_empty() { record.item_id.clone() } else { record.item_name.clone() },
                record.quantity.to_string(),
                record.reason.clone(),
                opt(record.challan_number.as_ref()),
                record.created_at.map(|at| at.format("%Y-%m-%d").to_string()).unwrap_or_else(|| "-".into()),
            ]);
        }
        table.render(limit, "No returns filed")
    }
}

fn validate(request: &NewReturn) -> Result<()> {
    require("Item", &request.item_id)?;
    require_positive("Quantity", request.quantity)?;
    require("Reason", &request.reason)
}
