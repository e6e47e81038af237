//! # CRM Desk Core
//!
//! Pure client logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for storage, the backend and toasts
//! - The session context and session service
//! - The auth guard
//! - The sidebar preference with same-process change signaling
//! - View state, cancellation scopes, filters and aggregations
//!
//! ## Architecture Principles
//! - Only depends on `crmdesk-domain`
//! - No HTTP, filesystem, or terminal code
//! - All external dependencies via traits
//! - Pure, testable logic

pub mod crm;
pub mod guard;
pub mod notify;
pub mod preferences;
pub mod session;
pub mod storage;
pub mod validation;
pub mod views;

#[cfg(test)]
pub(crate) mod testing;

// Re-export specific items to avoid ambiguity
pub use crm::ports::CrmGateway;
pub use guard::{AuthGuard, GuardOutcome, GuardState};
pub use notify::{Notification, NotificationLevel, Notifier};
pub use preferences::SidebarPreference;
pub use session::ports::{AccessTokenProvider, AuthGateway};
pub use session::{ProfileLookup, Session, SessionContext, SessionService};
pub use storage::KeyValueStore;
pub use views::{View, ViewScope, ViewState};
