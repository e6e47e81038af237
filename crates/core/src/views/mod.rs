//! View-model plumbing shared by every page
//!
//! - [`state`]: loading flag + fetched data, cancellation scope, and the
//!   fetch/act/notify cycle
//! - [`filters`]: in-memory text and status filters
//! - [`aggregates`]: sums and counts for display

pub mod aggregates;
pub mod filters;
pub mod state;

pub use filters::Searchable;
pub use state::{View, ViewScope, ViewState};
