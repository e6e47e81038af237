//! Session handling: explicit context, persistence and auth ports

pub mod context;
pub mod ports;
pub mod service;

pub use context::{Session, SessionContext};
pub use service::{ProfileLookup, SessionService};
