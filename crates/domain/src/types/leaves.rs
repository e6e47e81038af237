//! Leave requests

use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;

/// Approval state of a leave request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Default)]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl_domain_status_conversions!(LeaveStatus {
    Pending => "Pending",
    Approved => "Approved",
    Rejected => "Rejected",
});

/// A leave request filed by an employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    #[serde(flatten, with = "crate::utils::serde::record_id")]
    pub id: String,
    #[serde(default)]
    pub employee_id: String,
    pub employee_name: String,
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub status: LeaveStatus,
}

/// Body of `PUT /leaves/{id}/status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LeaveStatusUpdate {
    pub status: LeaveStatus,
}
