//! Status Transition Workflow
//!
//! Drives one booking status change: precondition check, admin
//! confirmation, the backend commit, the best-effort table release, and
//! the local store patch.

use crate::api::BookingApi;
use crate::error::WorkflowError;
use crate::store::BookingStore;
use crate::ui::{ConfirmDialog, ConfirmRequest, Confirmation, DialogIcon, Notification, Notifier};
use shared::models::{BookingStatus, TableStatus};
use std::sync::Arc;

/// One requested status change
#[derive(Debug, Clone, Copy)]
pub struct TransitionRequest {
    pub booking_id: i64,
    pub current_status: BookingStatus,
    pub requested_status: BookingStatus,
    pub table_id: i64,
}

/// Outcome of a permitted transition request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// Backend updated and store patched
    Committed,
    /// The admin dismissed the confirmation dialog; nothing happened
    Dismissed,
}

/// Coordinates booking status transitions against the backend
pub struct TransitionWorkflow {
    api: Arc<dyn BookingApi>,
    dialog: Arc<dyn ConfirmDialog>,
    notifier: Arc<dyn Notifier>,
}

impl TransitionWorkflow {
    pub fn new(
        api: Arc<dyn BookingApi>,
        dialog: Arc<dyn ConfirmDialog>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            dialog,
            notifier,
        }
    }

    /// Validate, confirm, and execute one status transition.
    ///
    /// Only `APPROVE -> SUCCEED` and `APPROVE -> CANCEL` are permitted;
    /// anything else is rejected before any backend call. On commit
    /// success the store's single record is patched so the view reflects
    /// the new status without a reload.
    pub async fn request_transition(
        &self,
        store: &mut BookingStore,
        request: TransitionRequest,
    ) -> Result<TransitionOutcome, WorkflowError> {
        if request.current_status != BookingStatus::Approve
            || !matches!(
                request.requested_status,
                BookingStatus::Succeed | BookingStatus::Cancel
            )
        {
            self.notifier
                .notify(Notification::info(
                    "This booking cannot change to that status from its current status.",
                ))
                .await;
            return Err(WorkflowError::InvalidTransition {
                from: request.current_status,
                to: request.requested_status,
            });
        }

        let confirmation = self.dialog.confirm(confirm_request(request.requested_status)).await;
        let note = match confirmation {
            Confirmation::Dismissed => return Ok(TransitionOutcome::Dismissed),
            Confirmation::Confirmed { note } => note,
        };

        // The dialog re-prompts on empty input; an empty note slipping
        // through is still rejected before any backend call.
        let note = if request.requested_status == BookingStatus::Cancel {
            match note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()) {
                Some(note) => Some(note),
                None => {
                    self.notifier
                        .notify(Notification::info("A cancellation note is required."))
                        .await;
                    return Err(WorkflowError::MissingNote);
                }
            }
        } else {
            None
        };

        if let Err(err) = self
            .api
            .update_booking_status(request.booking_id, request.requested_status, note.clone())
            .await
        {
            tracing::error!(
                booking_id = request.booking_id,
                error = %err,
                "booking status update failed"
            );
            self.notifier
                .notify(Notification::error("The booking status could not be changed."))
                .await;
            return Err(WorkflowError::Transport(err));
        }

        // Best-effort table release: the booking is already resolved, so
        // a failure here is logged and never rolls the status back.
        if let Err(err) = self
            .api
            .update_table_status(request.table_id, TableStatus::Free)
            .await
        {
            tracing::warn!(
                table_id = request.table_id,
                error = %err,
                "table release failed after status update"
            );
        }

        store.patch_status(request.booking_id, request.requested_status, note);

        let message = match request.requested_status {
            BookingStatus::Succeed => "The booking was completed.",
            _ => "The booking was canceled.",
        };
        self.notifier.notify(Notification::success(message)).await;

        Ok(TransitionOutcome::Committed)
    }
}

fn confirm_request(requested: BookingStatus) -> ConfirmRequest {
    match requested {
        BookingStatus::Cancel => ConfirmRequest {
            title: "Cancel this booking?".to_string(),
            icon: DialogIcon::Warning,
            confirm_label: "Cancel booking".to_string(),
            note_prompt: Some("Reason for cancellation...".to_string()),
        },
        _ => ConfirmRequest {
            title: "Complete this booking?".to_string(),
            icon: DialogIcon::Warning,
            confirm_label: "Confirm".to_string(),
            note_prompt: None,
        },
    }
}
