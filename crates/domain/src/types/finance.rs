//! Expense records

use serde::{Deserialize, Serialize};

/// A submitted expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(flatten, with = "crate::utils::serde::record_id")]
    pub id: String,
    pub title: String,
    pub category: String,
    pub amount: f64,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub submitted_by: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
