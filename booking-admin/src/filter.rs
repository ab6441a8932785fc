//! Filter Pipeline
//!
//! Pure derivation of the visible booking subset from the store snapshot
//! and the current filter inputs. Store order is preserved; no re-sort.

use chrono::{DateTime, NaiveDate, Utc};
use shared::models::{Booking, BookingStatus};

/// Fixed date-time rendering used in the table and in the search haystack
pub fn format_datetime(at: &DateTime<Utc>) -> String {
    at.format("%d/%m/%Y %H:%M:%S").to_string()
}

/// Compute the visible subset of `bookings`.
///
/// Stages: keep only listed statuses (narrowed to `status_filter` when
/// set), then the calendar-day match against `date_filter`, then the
/// case-insensitive substring search. An empty search term matches all.
pub fn visible(
    bookings: &[Booking],
    status_filter: Option<BookingStatus>,
    date_filter: Option<NaiveDate>,
    search_term: &str,
) -> Vec<Booking> {
    let term = search_term.trim().to_lowercase();

    bookings
        .iter()
        .filter(|b| b.status_booking.is_listed())
        .filter(|b| status_filter.is_none_or(|status| b.status_booking == status))
        .filter(|b| date_filter.is_none_or(|date| b.booking_datatime.date_naive() == date))
        .filter(|b| matches_term(b, &term))
        .cloned()
        .collect()
}

/// Substring match against table name, table type, customer first name,
/// status label, and the formatted date-time string.
fn matches_term(booking: &Booking, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    booking.table.table_name.to_lowercase().contains(term)
        || booking.table.type_table.type_name.to_lowercase().contains(term)
        || booking.user.firstname.to_lowercase().contains(term)
        || booking.status_booking.label().contains(term)
        || format_datetime(&booking.booking_datatime).contains(term)
}
