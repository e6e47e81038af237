//! Application constants
//!
//! Centralized location for storage keys, the API prefix and the route paths
//! that act as the navigation surface between views.

// Persisted client state
pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const SIDEBAR_COLLAPSED_KEY: &str = "sidebarCollapsed";

// HTTP
pub const API_PREFIX: &str = "/api";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

// Storage
pub const DEFAULT_STORAGE_FILE: &str = "crmdesk-storage.json";

// Views
pub const DEFAULT_PAGE_SIZE: usize = 25;
pub const LOW_STOCK_MARKER: &str = "LOW";

// Route paths
pub const LOGIN_ROUTE: &str = "/auth/login";
pub const REGISTER_ROUTE: &str = "/auth/register";
pub const DASHBOARD_ROUTE: &str = "/dashboard";
