//! Booking Admin - dashboard core for the table-booking admin view
//!
//! Holds the booking store, the pure filter/pagination derivations, the
//! summary counters, and the status-transition workflow. Rendering,
//! session management, and the REST backend are external collaborators
//! injected through the [`BookingApi`], [`ConfirmDialog`], and
//! [`Notifier`] traits.

pub mod api;
pub mod error;
pub mod filter;
pub mod page;
pub mod state;
pub mod store;
pub mod ui;
pub mod workflow;

pub use api::BookingApi;
pub use error::{StoreError, WorkflowError};
pub use state::DashboardState;
pub use store::{BookingStore, StatusCounts};
pub use ui::{ConfirmDialog, ConfirmRequest, Confirmation, DialogIcon, Notification, NotificationKind, Notifier};
pub use workflow::{TransitionOutcome, TransitionRequest, TransitionWorkflow};
