//! `/dashboard/leads`

use crmdesk_core::views::aggregates::{count_by, total};
use crmdesk_core::views::filters::{filter_text, leads_with_status};
use crmdesk_core::View;
use crmdesk_domain::{Lead, LeadStatus};

use super::track;
use crate::context::AppContext;
use crate::render::{cards, money, opt, Table};
use crate::routes::Route;

pub struct LeadsPage {
    view: View<Vec<Lead>>,
    query: String,
    status: Option<LeadStatus>,
}

impl LeadsPage {
    pub fn new(ctx: &AppContext) -> Self {
        Self { view: View::new("leads", ctx.notifier()), query: String::new(), status: None }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_status(mut self, status: Option<LeadStatus>) -> Self {
        self.status = status;
        self
    }

    pub async fn load(&mut self, ctx: &AppContext) -> bool {
        track(Route::Leads, "load", self.view.load(ctx.crm.leads())).await
    }

    pub fn view(&self) -> &View<Vec<Lead>> {
        &self.view
    }

    /// Leads passing both the text and the status filter.
    pub fn visible(&self) -> Vec<&Lead> {
        let matching = filter_text(self.view.data(), &self.query);
        match self.status {
            Some(status) => leads_with_status(matching, status),
            None => matching,
        }
    }

    /// Value of visible leads that are still open.
    pub fn pipeline_value(&self) -> f64 {
        total(self.visible().into_iter().filter(|lead| lead.status.is_open()), |lead| lead.value)
    }

    pub fn render(&self, limit: usize) -> String {
        let visible = self.visible();
        let counts = count_by(visible.iter().copied(), |lead| lead.status);

        let mut summary = vec![
            ("Leads", visible.len().to_string()),
            ("Pipeline value", money(self.pipeline_value())),
        ];
        for status in LeadStatus::ALL {
            let count = counts.get(&status).copied().unwrap_or(0);
            summary.push((status.as_str(), count.to_string()));
        }

        let mut table = Table::new(["Name", "Company", "Status", "Source", "Assigned to", "Value"]);
        for lead in &visible {
            table.row([
                lead.name.clone(),
                opt(lead.company.as_ref()),
                lead.status.to_string(),
                opt(lead.source.as_ref()),
                opt(lead.assigned_to.as_ref()),
                money(lead.value),
            ]);
        }

        format!("{}\n{}", cards(&summary), table.render(limit, "No leads found"))
    }
}
