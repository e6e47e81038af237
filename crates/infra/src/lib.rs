//! # CRM Desk Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The reqwest-based HTTP client and the backend `ApiClient`
//! - HTTP gateways implementing `AuthGateway` and `CrmGateway`
//! - `KeyValueStore` adapters (JSON file, in-memory)
//! - Configuration loading (`.env`, config files, environment)
//!
//! ## Architecture
//! - Implements traits defined in `crmdesk-core`
//! - Contains all "impure" code (network, filesystem, environment)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod storage;

// Re-export commonly used items
pub use api::{
    ApiClient, ApiClientConfig, ApiError, HttpAuthGateway, HttpCrmGateway, RequestOptions,
};
pub use errors::InfraError;
pub use http::HttpClient;
pub use storage::{FileKeyValueStore, MemoryKeyValueStore};
