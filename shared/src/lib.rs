//! Shared types for the table-booking admin dashboard
//!
//! Data models and wire DTOs used by both the HTTP client and the
//! dashboard core.

pub mod client;
pub mod models;

pub use client::{BookingListResponse, BookingStatusUpdate, TableStatusUpdate};
pub use models::{Booking, BookingStatus, DiningTable, TableStatus, TableType, User};
