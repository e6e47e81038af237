//! `/dashboard`
//!
//! The sales and leads reports and the challan stats are fetched together;
//! all three must succeed for the dashboard to update.

use crmdesk_core::views::aggregates::{count_by, total};
use crmdesk_core::View;
use crmdesk_domain::{CrmError, DeliveryChallanStats, LeadStatus, LeadsReport, SalesReport};

use super::challans::stat_cards;
use super::track;
use crate::context::AppContext;
use crate::render::{cards, money};
use crate::routes::Route;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub sales: SalesReport,
    pub leads: LeadsReport,
    pub challans: DeliveryChallanStats,
}

pub struct DashboardPage {
    view: View<DashboardData>,
}

impl DashboardPage {
    pub fn new(ctx: &AppContext) -> Self {
        Self { view: View::new("dashboard", ctx.notifier()) }
    }

    pub async fn load(&mut self, ctx: &AppContext) -> bool {
        let crm = ctx.crm.clone();
        let fetch = async move {
            let (sales, leads, challans) = futures::try_join!(
                crm.sales_report(),
                crm.leads_report(),
                crm.delivery_challan_stats()
            )?;
            Ok::<_, CrmError>(DashboardData { sales, leads, challans })
        };
        track(Route::Dashboard, "load", self.view.load(fetch)).await
    }

    pub fn data(&self) -> &DashboardData {
        self.view.data()
    }

    pub fn revenue(&self) -> f64 {
        total(&self.data().sales.sales, |sale| sale.amount)
    }

    pub fn lead_count(&self, status: LeadStatus) -> usize {
        self.data().leads.leads.iter().filter(|lead| lead.status == status).count()
    }

    pub fn render(&self) -> String {
        let data = self.data();
        let counts = count_by(&data.leads.leads, |lead| lead.status);

        let mut summary = vec![
            ("Sales", data.sales.sales.len().to_string()),
            ("Revenue", money(self.revenue())),
            ("Leads", data.leads.leads.len().to_string()),
        ];
        for status in LeadStatus::ALL {
            summary.push((status.as_str(), counts.get(&status).copied().unwrap_or(0).to_string()));
        }

        format!("{}\n{}", cards(&summary), stat_cards(&data.challans))
    }
}
