//! Backend API client
//!
//! `client` owns the request conventions (base URL, `/api` prefix, bearer
//! token, error normalization); `gateway` maps endpoints onto the core ports.

pub mod client;
pub mod errors;
pub mod gateway;

pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig, RequestOptions};
pub use errors::ApiError;
pub use gateway::{HttpAuthGateway, HttpCrmGateway};
