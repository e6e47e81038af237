//! Thin reqwest wrapper shared by the API client

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
