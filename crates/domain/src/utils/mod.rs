//! Shared serde helpers for the domain types

pub mod serde;
