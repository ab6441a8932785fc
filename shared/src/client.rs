//! Client-related types shared between the dashboard and the HTTP client
//!
//! Request/response payloads for the admin booking API.

use serde::{Deserialize, Serialize};

use crate::models::{Booking, BookingStatus, TableStatus};

/// Response of `GET /admin/bookings`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingListResponse {
    pub bookings: Vec<Booking>,
}

/// Body of `PATCH /admin/updateStatusBooking/{booking_id}`
///
/// `note_booking` is serialized as an explicit null when absent; the
/// backend expects the field to be present either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingStatusUpdate {
    pub status_booking: BookingStatus,
    pub note_booking: Option<String>,
}

/// Body of `PATCH /admin/updateStatus/{table_id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableStatusUpdate {
    pub table_status: TableStatus,
}
