//! `/dashboard/sales`

use crmdesk_core::views::aggregates::total;
use crmdesk_core::views::filters::filter_text;
use crmdesk_core::View;
use crmdesk_domain::Sale;

use super::track;
use crate::context::AppContext;
use crate::render::{cards, money, opt, Table};
use crate::routes::Route;

pub struct SalesPage {
    view: View<Vec<Sale>>,
    query: String,
}

impl SalesPage {
    pub fn new(ctx: &AppContext) -> Self {
        Self { view: View::new("sales", ctx.notifier()), query: String::new() }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub async fn load(&mut self, ctx: &AppContext) -> bool {
        track(Route::Sales, "load", self.view.load(ctx.crm.sales())).await
    }

    pub fn view(&self) -> &View<Vec<Sale>> {
        &self.view
    }

    pub fn visible(&self) -> Vec<&Sale> {
        filter_text(self.view.data(), &self.query)
    }

    pub fn revenue(&self) -> f64 {
        total(self.visible(), |sale| sale.amount)
    }

    pub fn units(&self) -> u64 {
        self.visible().iter().map(|sale| u64::from(sale.quantity)).sum()
    }

    pub fn render(&self, limit: usize) -> String {
        let visible = self.visible();
        let summary = [
            ("Sales", visible.len().to_string()),
            ("Revenue", money(self.revenue())),
            ("Units sold", self.units().to_string()),
        ];

        let mut table = Table::new(["Customer", "Product", "Qty", "Amount", "Sold by", "Date"]);
        for sale in &visible {
            table.row([
                sale.customer_name.clone(),
                sale.product.clone(),
                sale.quantity.to_string(),
                money(sale.amount),
                opt(sale.sold_by.as_ref()),
                opt(sale.date.as_ref()),
            ]);
        }

        format!("{}\n{}", cards(&summary), table.render(limit, "No sales recorded"))
    }
}
