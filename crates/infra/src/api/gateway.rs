//! Typed backend endpoints
//!
//! Implements the core ports on top of [`ApiClient`]. Paths are relative to
//! the `/api` prefix the client adds.

use std::sync::Arc;

use async_trait::async_trait;
use crmdesk_core::{AuthGateway, CrmGateway};
use crmdesk_domain::{
    AuthResponse, Credentials, DeliveryChallanStats, Employee, Expense, Lead, LeadsReport,
    LeaveRequest, LeaveStatus, LeaveStatusUpdate, NewReturn, PasswordReset, Registration, Result,
    ReturnRecord, Sale, SalesReport, Trainer, WarehouseItem,
};
use serde::de::IgnoredAny;
use tracing::{debug, instrument};
use urlencoding::encode;

use super::client::ApiClient;

/// `/auth/*` endpoints
pub struct HttpAuthGateway {
    client: Arc<ApiClient>,
}

impl HttpAuthGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse> {
        let response: AuthResponse = self.client.post("/auth/login", credentials).await?;
        debug!(user_id = %response.user.id, "login accepted");
        Ok(response)
    }

    #[instrument(skip(self, registration), fields(email = %registration.email))]
    async fn register(&self, registration: &Registration) -> Result<AuthResponse> {
        let response: AuthResponse = self.client.post("/auth/register", registration).await?;
        debug!(user_id = %response.user.id, "registration accepted");
        Ok(response)
    }
}

/// Collection and action endpoints used by the dashboard
pub struct HttpCrmGateway {
    client: Arc<ApiClient>,
}

impl HttpCrmGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    async fn list<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let items: Vec<T> = self.client.get(path).await?;
        debug!(path, count = items.len(), "collection fetched");
        Ok(items)
    }
}

#[async_trait]
impl CrmGateway for HttpCrmGateway {
    async fn leads(&self) -> Result<Vec<Lead>> {
        self.list("/leads").await
    }

    async fn sales(&self) -> Result<Vec<Sale>> {
        self.list("/sales").await
    }

    async fn employees(&self) -> Result<Vec<Employee>> {
        self.list("/employees").await
    }

    async fn leaves(&self) -> Result<Vec<LeaveRequest>> {
        self.list("/leaves").await
    }

    #[instrument(skip(self), fields(leave_id = %leave_id, status = %status))]
    async fn set_leave_status(&self, leave_id: &str, status: LeaveStatus) -> Result<()> {
        let path = format!("/leaves/{}/status", encode(leave_id));
        let _: IgnoredAny = self.client.put(&path, &LeaveStatusUpdate { status }).await?;
        Ok(())
    }

    async fn expenses(&self) -> Result<Vec<Expense>> {
        self.list("/expenses").await
    }

    async fn warehouse_items(&self) -> Result<Vec<WarehouseItem>> {
        self.list("/warehouse").await
    }

    async fn trainers(&self) -> Result<Vec<Trainer>> {
        self.list("/trainers").await
    }

    async fn returns(&self) -> Result<Vec<ReturnRecord>> {
        self.list("/returns").await
    }

    #[instrument(skip(self, request), fields(item_id = %request.item_id, quantity = request.quantity))]
    async fn create_return(&self, request: &NewReturn) -> Result<ReturnRecord> {
        let created: ReturnRecord = self.client.post("/returns", request).await?;
        debug!(return_id = %created.id, "return created");
        Ok(created)
    }

    #[instrument(skip(self, password), fields(user_id = %user_id))]
    async fn reset_password(&self, user_id: &str, password: &str) -> Result<()> {
        let path = format!("/users/{}/reset-password", encode(user_id));
        let body = PasswordReset { password: password.to_string() };
        let _: IgnoredAny = self.client.post(&path, &body).await?;
        Ok(())
    }

    async fn sales_report(&self) -> Result<SalesReport> {
        Ok(self.client.get("/reports/sales").await?)
    }

    async fn leads_report(&self) -> Result<LeadsReport> {
        Ok(self.client.get("/reports/leads").await?)
    }

    async fn delivery_challan_stats(&self) -> Result<DeliveryChallanStats> {
        Ok(self.client.get("/delivery-challans/stats").await?)
    }
}
