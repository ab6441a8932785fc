//! Booking Store
//!
//! Read-mostly cache of the backend's booking collection. Loaded
//! wholesale, patched locally after a confirmed status transition.

use crate::api::BookingApi;
use crate::error::StoreError;
use chrono::NaiveDate;
use shared::models::{Booking, BookingStatus};
use std::sync::Arc;

/// Derived status counts, recomputed from the full store contents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub approved: usize,
    pub canceled: usize,
    pub succeeded: usize,
}

impl StatusCounts {
    /// Headline total shown on the dashboard. Succeeded bookings are not
    /// part of it, matching the upstream product behavior.
    pub fn total(&self) -> usize {
        self.approved + self.canceled
    }
}

/// In-memory booking collection for the admin view
pub struct BookingStore {
    api: Arc<dyn BookingApi>,
    bookings: Vec<Booking>,
}

impl BookingStore {
    /// Create an empty store backed by the given API
    pub fn new(api: Arc<dyn BookingApi>) -> Self {
        Self {
            api,
            bookings: Vec::new(),
        }
    }

    /// Fetch the full collection and replace the contents atomically.
    ///
    /// On failure the previous contents are kept (empty on first load)
    /// and no retry is attempted.
    pub async fn load(&mut self) -> Result<(), StoreError> {
        match self.api.bookings().await {
            Ok(bookings) => {
                tracing::debug!(count = bookings.len(), "booking store loaded");
                self.bookings = bookings;
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch bookings");
                Err(StoreError::FetchFailed(err))
            }
        }
    }

    /// Replace the contents without going through the backend
    pub fn replace(&mut self, bookings: Vec<Booking>) {
        self.bookings = bookings;
    }

    /// Current contents, in backend order
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn get(&self, booking_id: i64) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.booking_id == booking_id)
    }

    /// Update exactly one record's status (and note, when given) in
    /// place. Order and all other records are untouched. Returns whether
    /// a record with that id was found.
    pub fn patch_status(
        &mut self,
        booking_id: i64,
        status: BookingStatus,
        note: Option<String>,
    ) -> bool {
        let Some(booking) = self.bookings.iter_mut().find(|b| b.booking_id == booking_id) else {
            return false;
        };
        booking.status_booking = status;
        if note.is_some() {
            booking.note_booking = note;
        }
        true
    }

    /// Recompute the summary counters from the full contents
    pub fn counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for booking in &self.bookings {
            match booking.status_booking {
                BookingStatus::Approve => counts.approved += 1,
                BookingStatus::Cancel => counts.canceled += 1,
                BookingStatus::Succeed => counts.succeeded += 1,
                BookingStatus::Unknown => {}
            }
        }
        counts
    }

    /// Sorted, deduplicated calendar dates of the listed bookings; feeds
    /// the date-filter dropdown.
    pub fn unique_dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self
            .bookings
            .iter()
            .filter(|b| b.status_booking.is_listed())
            .map(|b| b.booking_datatime.date_naive())
            .collect();
        dates.sort();
        dates.dedup();
        dates
    }
}
