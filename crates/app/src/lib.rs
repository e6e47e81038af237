//! # CRM Desk
//!
//! Application layer - context wiring, pages and the terminal front end.
//!
//! This crate contains:
//! - Application context (dependency injection)
//! - Route table and page views
//! - Text rendering and the toast queue
//! - Logging setup
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - The `crmdesk` binary is a thin clap front end over [`pages`]

pub mod context;
pub mod notifications;
pub mod pages;
pub mod render;
pub mod routes;
pub mod utils;

// Re-export for convenience
pub use context::AppContext;
pub use notifications::ToastQueue;
pub use pages::{act, open, PageAction, PageFilters, PageOutcome};
pub use routes::{Route, UnknownRoute};
