//! `/dashboard/trainers`

use crmdesk_core::views::filters::filter_text;
use crmdesk_core::View;
use crmdesk_domain::Trainer;

use super::track;
use crate::context::AppContext;
use crate::render::{opt, Table};
use crate::routes::Route;

pub struct TrainersPage {
    view: View<Vec<Trainer>>,
    query: String,
}

impl TrainersPage {
    pub fn new(ctx: &AppContext) -> Self {
        Self { view: View::new("trainers", ctx.notifier()), query: String::new() }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub async fn load(&mut self, ctx: &AppContext) -> bool {
        track(Route::Trainers, "load", self.view.load(ctx.crm.trainers())).await
    }

    pub fn visible(&self) -> Vec<&Trainer> {
        filter_text(self.view.data(), &self.query)
    }

    pub fn render(&self, limit: usize) -> String {
        let mut table = Table::new(["Name", "Email", "Phone", "Specialization", "Active batches"]);
        for trainer in self.visible() {
            table.row([
                trainer.name.clone(),
                trainer.email.clone(),
                opt(trainer.phone.as_ref()),
                opt(trainer.specialization.as_ref()),
                trainer.active_batches.to_string(),
            ]);
        }
        table.render(limit, "No trainers found")
    }
}
