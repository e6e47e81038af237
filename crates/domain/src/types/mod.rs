//! Domain types and models
//!
//! Every collection the backend serves has a view-model here. Field names
//! follow the backend's camelCase JSON; Ids decode from `id`, `_id`, or both.

pub mod finance;
pub mod leads;
pub mod leaves;
pub mod people;
pub mod sales;
pub mod user;
pub mod warehouse;

pub use finance::Expense;
pub use leads::{Lead, LeadStatus};
pub use leaves::{LeaveRequest, LeaveStatus, LeaveStatusUpdate};
pub use people::{Employee, PasswordReset, Trainer};
pub use sales::{Sale, SalesReport, LeadsReport};
pub use user::{AuthResponse, Credentials, Registration, Role, UserProfile};
pub use warehouse::{DeliveryChallanStats, NewReturn, ReturnRecord, WarehouseItem};
