//! `/dashboard/expenses`

use crmdesk_core::views::aggregates::{total, totals_by};
use crmdesk_core::views::filters::filter_text;
use crmdesk_core::View;
use crmdesk_domain::Expense;

use super::track;
use crate::context::AppContext;
use crate::render::{cards, money, opt, Table};
use crate::routes::Route;

pub struct ExpensesPage {
    view: View<Vec<Expense>>,
    query: String,
}

impl ExpensesPage {
    pub fn new(ctx: &AppContext) -> Self {
        Self { view: View::new("expenses", ctx.notifier()), query: String::new() }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub async fn load(&mut self, ctx: &AppContext) -> bool {
        track(Route::Expenses, "load", self.view.load(ctx.crm.expenses())).await
    }

    pub fn visible(&self) -> Vec<&Expense> {
        filter_text(self.view.data(), &self.query)
    }

    /// Spend per category, ordered by category name.
    pub fn totals_by_category(&self) -> Vec<(String, f64)> {
        totals_by(self.visible(), |expense| expense.category.clone(), |expense| expense.amount)
            .into_iter()
            .collect()
    }

    pub fn render(&self, limit: usize) -> String {
        let visible = self.visible();
        let by_category = self.totals_by_category();

        let mut summary = vec![("Total spend", money(total(visible.iter().copied(), |e| e.amount)))];
        summary.extend(by_category.iter().map(|(category, amount)| (category.as_str(), money(*amount))));

        let mut table = Table::new(["Title", "Category", "Amount", "Date", "Submitted by", "Status"]);
        for expense in &visible {
            table.row([
                expense.title.clone(),
                expense.category.clone(),
                money(expense.amount),
                opt(expense.date.as_ref()),
                opt(expense.submitted_by.as_ref()),
                opt(expense.status.as_ref()),
            ]);
        }

        format!("{}\n{}", cards(&summary), table.render(limit, "No expenses recorded"))
    }
}
