//! `/dashboard/warehouse`

use crmdesk_core::views::aggregates::total;
use crmdesk_core::views::filters::{filter_text, low_stock};
use crmdesk_core::View;
use crmdesk_domain::constants::LOW_STOCK_MARKER;
use crmdesk_domain::WarehouseItem;

use super::track;
use crate::context::AppContext;
use crate::render::{cards, money, opt, Table};
use crate::routes::Route;

pub struct WarehousePage {
    view: View<Vec<WarehouseItem>>,
    query: String,
}

impl WarehousePage {
    pub fn new(ctx: &AppContext) -> Self {
        Self { view: View::new("warehouse", ctx.notifier()), query: String::new() }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub async fn load(&mut self, ctx: &AppContext) -> bool {
        track(Route::Warehouse, "load", self.view.load(ctx.crm.warehouse_items())).await
    }

    pub fn visible(&self) -> Vec<&WarehouseItem> {
        filter_text(self.view.data(), &self.query)
    }

    /// Visible items at or below their reorder level.
    pub fn low_stock_count(&self) -> usize {
        low_stock(self.visible()).len()
    }

    pub fn stock_value(&self) -> f64 {
        total(self.visible(), WarehouseItem::stock_value)
    }

    pub fn render(&self, limit: usize) -> String {
        let visible = self.visible();
        let summary = [
            ("Items", visible.len().to_string()),
            ("Low stock", self.low_stock_count().to_string()),
            ("Stock value", money(self.stock_value())),
        ];

        let mut table =
            Table::new(["SKU", "Name", "Category", "Qty", "Reorder at", "Unit price", "Location", ""]);
        for item in &visible {
            table.row([
                item.sku.clone(),
                item.name.clone(),
                opt(item.category.as_ref()),
                item.quantity.to_string(),
                item.reorder_level.to_string(),
                money(item.unit_price),
                opt(item.location.as_ref()),
                if item.is_low_stock() { LOW_STOCK_MARKER.to_string() } else { String::new() },
            ]);
        }

        format!("{}\n{}", cards(&summary), table.render(limit, "Warehouse is empty"))
    }
}
