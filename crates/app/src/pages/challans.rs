//! `/dashboard/delivery-challans`

use crmdesk_core::View;
use crmdesk_domain::DeliveryChallanStats;

use super::track;
use crate::context::AppContext;
use crate::render::{cards, money};
use crate::routes::Route;

pub struct ChallansPage {
    view: View<DeliveryChallanStats>,
}

impl ChallansPage {
    pub fn new(ctx: &AppContext) -> Self {
        Self { view: View::new("delivery-challans", ctx.notifier()) }
    }

    pub async fn load(&mut self, ctx: &AppContext) -> bool {
        track(Route::DeliveryChallans, "load", self.view.load(ctx.crm.delivery_challan_stats())).await
    }

    pub fn stats(&self) -> &DeliveryChallanStats {
        self.view.data()
    }

    pub fn render(&self) -> String {
        stat_cards(self.stats())
    }
}

pub(crate) fn stat_cards(stats: &DeliveryChallanStats) -> String {
    cards(&[
        ("Total challans", stats.total.to_string()),
        ("Delivered", stats.delivered.to_string()),
        ("Pending", stats.pending.to_string()),
        ("Cancelled", stats.cancelled.to_string()),
        ("Total value", money(stats.total_value)),
    ])
}
