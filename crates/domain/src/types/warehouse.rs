//! Warehouse inventory, returns and delivery challans

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stocked item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseItem {
    #[serde(flatten, with = "crate::utils::serde::record_id")]
    pub id: String,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub reorder_level: u32,
}

impl WarehouseItem {
    /// At or below the reorder level.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.reorder_level
    }

    pub fn stock_value(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// A goods return against a delivery challan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRecord {
    #[serde(flatten, with = "crate::utils::serde::record_id")]
    pub id: String,
    pub item_id: String,
    #[serde(default)]
    pub item_name: String,
    pub quantity: u32,
    pub reason: String,
    #[serde(default)]
    pub challan_number: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `POST /returns`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReturn {
    pub item_id: String,
    pub quantity: u32,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challan_number: Option<String>,
}

/// `GET /delivery-challans/stats`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeliveryChallanStats {
    pub total: u64,
    pub delivered: u64,
    pub pending: u64,
    pub cancelled: u64,
    pub total_value: f64,
}
