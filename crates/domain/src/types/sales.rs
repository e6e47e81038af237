//! Sales records and dashboard reports

use serde::{Deserialize, Serialize};

use super::leads::Lead;

/// A closed sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    #[serde(flatten, with = "crate::utils::serde::record_id")]
    pub id: String,
    pub customer_name: String,
    pub product: String,
    #[serde(default)]
    pub quantity: u32,
    pub amount: f64,
    #[serde(default)]
    pub sold_by: Option<String>,
    /// Sale date as sent by the backend (ISO date)
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// `GET /reports/sales`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    #[serde(default)]
    pub sales: Vec<Sale>,
}

/// `GET /reports/leads`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadsReport {
    #[serde(default)]
    pub leads: Vec<Lead>,
}
