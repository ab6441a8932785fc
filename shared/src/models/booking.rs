//! Booking Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DiningTable, User};

/// Booking status as stored by the backend
///
/// The admin view lists only the three known values; anything else the
/// backend may emit lands in [`BookingStatus::Unknown`] and is filtered
/// out instead of failing deserialization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Approve,
    Cancel,
    Succeed,
    #[serde(other)]
    Unknown,
}

impl BookingStatus {
    /// Label shown in the admin view; also part of the search haystack
    pub fn label(&self) -> &'static str {
        match self {
            Self::Approve => "approved",
            Self::Cancel => "canceled",
            Self::Succeed => "succeeded",
            Self::Unknown => "",
        }
    }

    /// Whether this status appears in the admin listing
    pub fn is_listed(&self) -> bool {
        matches!(self, Self::Approve | Self::Cancel | Self::Succeed)
    }

    /// Canceled and succeeded bookings accept no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancel | Self::Succeed)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Approve => "APPROVE",
            Self::Cancel => "CANCEL",
            Self::Succeed => "SUCCEED",
            Self::Unknown => "UNKNOWN",
        })
    }
}

/// Booking entity (one reservation of a table by a user)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: i64,
    pub booking_datatime: DateTime<Utc>,
    pub status_booking: BookingStatus,
    /// Populated only for canceled bookings
    #[serde(default)]
    pub note_booking: Option<String>,
    pub table: DiningTable,
    pub user: User,
}
