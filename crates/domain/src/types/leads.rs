//! Lead pipeline types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;

/// Stage of a lead in the sales pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Default)]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Converted,
    Lost,
}

impl_domain_status_conversions!(LeadStatus {
    New => "New",
    Contacted => "Contacted",
    Qualified => "Qualified",
    Converted => "Converted",
    Lost => "Lost",
});

impl LeadStatus {
    pub const ALL: [Self; 5] =
        [Self::New, Self::Contacted, Self::Qualified, Self::Converted, Self::Lost];

    /// Still in the pipeline (not converted and not lost).
    pub fn is_open(self) -> bool {
        !matches!(self, Self::Converted | Self::Lost)
    }
}

/// A prospective customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    #[serde(flatten, with = "crate::utils::serde::record_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub status: LeadStatus,
    #[serde(default)]
    pub assigned_to: Option<String>,
    /// Estimated deal value
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_decodes_lowercase_status_and_both_ids() {
        let lead: Lead = serde_json::from_str(
            r#"{"_id":"ld1","id":"ld1","name":"Initech","status":"qualified","value":1200}"#,
        )
        .unwrap();
        assert_eq!(lead.id, "ld1");
        assert_eq!(lead.status, LeadStatus::Qualified);
        assert!(lead.status.is_open());
        assert_eq!(lead.value, 1200.0);
    }

    #[test]
    fn lead_status_serializes_capitalized() {
        assert_eq!(serde_json::to_string(&LeadStatus::Converted).unwrap(), r#""Converted""#);
    }
}
