//! Port interface for the CRM backend
//!
//! One method per endpoint the views use. Implementations attach the session
//! token themselves; callers never see transport details.

use async_trait::async_trait;
use crmdesk_domain::{
    DeliveryChallanStats, Employee, Expense, Lead, LeadsReport, LeaveRequest, LeaveStatus,
    NewReturn, Result, ReturnRecord, Sale, SalesReport, Trainer, WarehouseItem,
};

/// Collections and actions exposed by the backend
#[async_trait]
pub trait CrmGateway: Send + Sync {
    async fn leads(&self) -> Result<Vec<Lead>>;

    async fn sales(&self) -> Result<Vec<Sale>>;

    async fn employees(&self) -> Result<Vec<Employee>>;

    async fn leaves(&self) -> Result<Vec<LeaveRequest>>;

    /// Approve or reject a leave request
    async fn set_leave_status(&self, leave_id: &str, status: LeaveStatus) -> Result<()>;

    async fn expenses(&self) -> Result<Vec<Expense>>;

    async fn warehouse_items(&self) -> Result<Vec<WarehouseItem>>;

    async fn trainers(&self) -> Result<Vec<Trainer>>;

    async fn returns(&self) -> Result<Vec<ReturnRecord>>;

    /// File a goods return; returns the created record
    async fn create_return(&self, request: &NewReturn) -> Result<ReturnRecord>;

    /// Set a new password for a user (admin action)
    async fn reset_password(&self, user_id: &str, password: &str) -> Result<()>;

    async fn sales_report(&self) -> Result<SalesReport>;

    async fn leads_report(&self) -> Result<LeadsReport>;

    async fn delivery_challan_stats(&self) -> Result<DeliveryChallanStats>;
}
