//! # CRM Desk Domain
//!
//! Business domain types and models for CRM Desk.
//!
//! This crate contains:
//! - View-model types for every backend collection (leads, sales, leaves, ...)
//! - The session profile and role types
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Storage keys, API prefix and route constants
//!
//! ## Architecture
//! - No dependencies on other CRM Desk crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
