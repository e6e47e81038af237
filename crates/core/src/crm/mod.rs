//! CRM backend collections and write actions

pub mod ports;

pub use ports::CrmGateway;
