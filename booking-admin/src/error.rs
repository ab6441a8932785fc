//! Dashboard error types

use booking_client::ClientError;
use shared::models::BookingStatus;
use thiserror::Error;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Initial booking list failed to load; previous contents are kept
    #[error("failed to fetch bookings: {0}")]
    FetchFailed(#[from] ClientError),
}

/// Transition workflow errors
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Requested transition is not permitted from the current status
    #[error("transition {from} -> {to} is not permitted")]
    InvalidTransition {
        from: BookingStatus,
        to: BookingStatus,
    },

    /// Cancellation requires a non-empty note
    #[error("a cancellation note is required")]
    MissingNote,

    /// The primary status update failed; the store is unchanged
    #[error("status update failed: {0}")]
    Transport(#[from] ClientError),
}
