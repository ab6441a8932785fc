//! Backend seam
//!
//! The dashboard core talks to the booking backend through this trait so
//! the transport can be swapped out in tests.

use async_trait::async_trait;
use booking_client::{ClientResult, HttpClient};
use shared::models::{Booking, BookingStatus, TableStatus};

/// Admin booking API consumed by the store and the transition workflow
#[async_trait]
pub trait BookingApi: Send + Sync {
    /// Fetch the full booking collection for the authenticated admin
    async fn bookings(&self) -> ClientResult<Vec<Booking>>;

    /// Update one booking's status (and cancellation note, when given)
    async fn update_booking_status(
        &self,
        booking_id: i64,
        status: BookingStatus,
        note: Option<String>,
    ) -> ClientResult<()>;

    /// Update one table's availability
    async fn update_table_status(&self, table_id: i64, status: TableStatus) -> ClientResult<()>;
}

#[async_trait]
impl BookingApi for HttpClient {
    async fn bookings(&self) -> ClientResult<Vec<Booking>> {
        HttpClient::bookings(self).await
    }

    async fn update_booking_status(
        &self,
        booking_id: i64,
        status: BookingStatus,
        note: Option<String>,
    ) -> ClientResult<()> {
        HttpClient::update_booking_status(self, booking_id, status, note).await
    }

    async fn update_table_status(&self, table_id: i64, status: TableStatus) -> ClientResult<()> {
        HttpClient::update_table_status(self, table_id, status).await
    }
}
