//! Data models
//!
//! Shared between the admin HTTP client and the dashboard core.
//! Field names follow the backend wire format.

pub mod booking;
pub mod dining_table;
pub mod user;

// Re-exports
pub use booking::*;
pub use dining_table::*;
pub use user::*;
