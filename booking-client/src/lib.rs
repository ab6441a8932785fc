//! Booking Client - HTTP client for the admin booking API
//!
//! Provides bearer-token authenticated calls to the booking backend.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::client::{BookingListResponse, BookingStatusUpdate, TableStatusUpdate};
