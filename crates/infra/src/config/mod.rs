//! Configuration loading
//!
//! The shape lives in `crmdesk_domain::Config`; this module finds and fills it.

pub mod loader;

pub use loader::{env_bool, load, load_from_env, load_from_file, probe_config_paths};
