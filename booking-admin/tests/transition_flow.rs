// booking-admin/tests/transition_flow.rs
//
// Status transition workflow scenarios against recording mocks.

use async_trait::async_trait;
use booking_admin::{
    BookingApi, BookingStore, ConfirmDialog, ConfirmRequest, Confirmation, Notification,
    NotificationKind, Notifier, TransitionOutcome, TransitionRequest, TransitionWorkflow,
    WorkflowError,
};
use booking_client::{ClientError, ClientResult};
use chrono::{TimeZone, Utc};
use shared::models::{Booking, BookingStatus, DiningTable, TableStatus, TableType, User};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
enum ApiCall {
    UpdateBooking {
        booking_id: i64,
        status: BookingStatus,
        note: Option<String>,
    },
    UpdateTable {
        table_id: i64,
        status: TableStatus,
    },
}

#[derive(Default)]
struct RecordingApi {
    calls: Mutex<Vec<ApiCall>>,
    fail_booking_update: bool,
    fail_table_update: bool,
}

impl RecordingApi {
    fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BookingApi for RecordingApi {
    async fn bookings(&self) -> ClientResult<Vec<Booking>> {
        Ok(Vec::new())
    }

    async fn update_booking_status(
        &self,
        booking_id: i64,
        status: BookingStatus,
        note: Option<String>,
    ) -> ClientResult<()> {
        self.calls.lock().unwrap().push(ApiCall::UpdateBooking {
            booking_id,
            status,
            note,
        });
        if self.fail_booking_update {
            return Err(ClientError::Internal("backend down".to_string()));
        }
        Ok(())
    }

    async fn update_table_status(&self, table_id: i64, status: TableStatus) -> ClientResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push(ApiCall::UpdateTable { table_id, status });
        if self.fail_table_update {
            return Err(ClientError::Internal("backend down".to_string()));
        }
        Ok(())
    }
}

struct ScriptedDialog {
    response: Confirmation,
    requests: Mutex<Vec<ConfirmRequest>>,
}

impl ScriptedDialog {
    fn new(response: Confirmation) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ConfirmDialog for ScriptedDialog {
    async fn confirm(&self, request: ConfirmRequest) -> Confirmation {
        self.requests.lock().unwrap().push(request);
        self.response.clone()
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    fn kinds(&self) -> Vec<NotificationKind> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.kind)
            .collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

fn booking(id: i64, table_id: i64, status: BookingStatus) -> Booking {
    Booking {
        booking_id: id,
        booking_datatime: Utc.with_ymd_and_hms(2024, 5, 17, 18, 30, 0).unwrap(),
        status_booking: status,
        note_booking: None,
        table: DiningTable {
            table_id,
            table_name: format!("T{}", table_id),
            table_seat: 4,
            table_price: 300.0,
            type_table: TableType {
                type_name: "Terrace".to_string(),
            },
        },
        user: User {
            firstname: "Anong".to_string(),
        },
    }
}

fn workflow_with(
    api: Arc<RecordingApi>,
    dialog: Arc<ScriptedDialog>,
    notifier: Arc<RecordingNotifier>,
) -> (TransitionWorkflow, BookingStore) {
    let workflow = TransitionWorkflow::new(api.clone(), dialog, notifier);
    let mut store = BookingStore::new(api);
    store.replace(vec![booking(42, 7, BookingStatus::Approve)]);
    (workflow, store)
}

fn request(requested: BookingStatus) -> TransitionRequest {
    TransitionRequest {
        booking_id: 42,
        current_status: BookingStatus::Approve,
        requested_status: requested,
        table_id: 7,
    }
}

#[tokio::test]
async fn test_succeed_commits_then_releases_table() {
    let api = Arc::new(RecordingApi::default());
    let dialog = Arc::new(ScriptedDialog::new(Confirmation::Confirmed { note: None }));
    let notifier = Arc::new(RecordingNotifier::default());
    let (workflow, mut store) = workflow_with(api.clone(), dialog, notifier.clone());

    let outcome = workflow
        .request_transition(&mut store, request(BookingStatus::Succeed))
        .await
        .unwrap();

    assert_eq!(outcome, TransitionOutcome::Committed);
    assert_eq!(
        api.calls(),
        vec![
            ApiCall::UpdateBooking {
                booking_id: 42,
                status: BookingStatus::Succeed,
                note: None,
            },
            ApiCall::UpdateTable {
                table_id: 7,
                status: TableStatus::Free,
            },
        ]
    );
    assert_eq!(
        store.get(42).unwrap().status_booking,
        BookingStatus::Succeed
    );
    assert_eq!(notifier.kinds(), vec![NotificationKind::Success]);
}

#[tokio::test]
async fn test_cancel_carries_note() {
    let api = Arc::new(RecordingApi::default());
    let dialog = Arc::new(ScriptedDialog::new(Confirmation::Confirmed {
        note: Some("double-booked".to_string()),
    }));
    let notifier = Arc::new(RecordingNotifier::default());
    let (workflow, mut store) = workflow_with(api.clone(), dialog.clone(), notifier);

    let outcome = workflow
        .request_transition(&mut store, request(BookingStatus::Cancel))
        .await
        .unwrap();

    assert_eq!(outcome, TransitionOutcome::Committed);
    assert_eq!(
        api.calls()[0],
        ApiCall::UpdateBooking {
            booking_id: 42,
            status: BookingStatus::Cancel,
            note: Some("double-booked".to_string()),
        }
    );

    let patched = store.get(42).unwrap();
    assert_eq!(patched.status_booking, BookingStatus::Cancel);
    assert_eq!(patched.note_booking.as_deref(), Some("double-booked"));

    // The cancel dialog asked for a note
    let requests = dialog.requests.lock().unwrap();
    assert!(requests[0].note_prompt.is_some());
}

#[tokio::test]
async fn test_cancel_with_blank_note_rejected_locally() {
    let api = Arc::new(RecordingApi::default());
    let dialog = Arc::new(ScriptedDialog::new(Confirmation::Confirmed {
        note: Some("   ".to_string()),
    }));
    let notifier = Arc::new(RecordingNotifier::default());
    let (workflow, mut store) = workflow_with(api.clone(), dialog, notifier.clone());

    let err = workflow
        .request_transition(&mut store, request(BookingStatus::Cancel))
        .await
        .unwrap_err();

    assert!(matches!(err, WorkflowError::MissingNote));
    assert!(api.calls().is_empty());
    assert_eq!(
        store.get(42).unwrap().status_booking,
        BookingStatus::Approve
    );
    assert_eq!(notifier.kinds(), vec![NotificationKind::Info]);
}

#[tokio::test]
async fn test_transition_from_terminal_status_rejected() {
    for current in [BookingStatus::Succeed, BookingStatus::Cancel] {
        let api = Arc::new(RecordingApi::default());
        let dialog = Arc::new(ScriptedDialog::new(Confirmation::Confirmed { note: None }));
        let notifier = Arc::new(RecordingNotifier::default());
        let (workflow, mut store) = workflow_with(api.clone(), dialog, notifier.clone());

        let err = workflow
            .request_transition(
                &mut store,
                TransitionRequest {
                    booking_id: 42,
                    current_status: current,
                    requested_status: BookingStatus::Succeed,
                    table_id: 7,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, WorkflowError::InvalidTransition { .. }));
        assert!(api.calls().is_empty());
        assert_eq!(notifier.kinds(), vec![NotificationKind::Info]);
    }
}

#[tokio::test]
async fn test_transition_to_approve_rejected() {
    let api = Arc::new(RecordingApi::default());
    let dialog = Arc::new(ScriptedDialog::new(Confirmation::Confirmed { note: None }));
    let notifier = Arc::new(RecordingNotifier::default());
    let (workflow, mut store) = workflow_with(api.clone(), dialog, notifier);

    let err = workflow
        .request_transition(&mut store, request(BookingStatus::Approve))
        .await
        .unwrap_err();

    assert!(matches!(err, WorkflowError::InvalidTransition { .. }));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_dismissal_is_a_silent_noop() {
    let api = Arc::new(RecordingApi::default());
    let dialog = Arc::new(ScriptedDialog::new(Confirmation::Dismissed));
    let notifier = Arc::new(RecordingNotifier::default());
    let (workflow, mut store) = workflow_with(api.clone(), dialog, notifier.clone());

    let outcome = workflow
        .request_transition(&mut store, request(BookingStatus::Succeed))
        .await
        .unwrap();

    assert_eq!(outcome, TransitionOutcome::Dismissed);
    assert!(api.calls().is_empty());
    assert!(notifier.kinds().is_empty());
    assert_eq!(
        store.get(42).unwrap().status_booking,
        BookingStatus::Approve
    );
}

#[tokio::test]
async fn test_commit_failure_leaves_store_untouched() {
    let api = Arc::new(RecordingApi {
        fail_booking_update: true,
        ..Default::default()
    });
    let dialog = Arc::new(ScriptedDialog::new(Confirmation::Confirmed { note: None }));
    let notifier = Arc::new(RecordingNotifier::default());
    let (workflow, mut store) = workflow_with(api.clone(), dialog, notifier.clone());

    let err = workflow
        .request_transition(&mut store, request(BookingStatus::Succeed))
        .await
        .unwrap_err();

    assert!(matches!(err, WorkflowError::Transport(_)));
    // No table release after a failed commit
    assert_eq!(api.calls().len(), 1);
    assert_eq!(
        store.get(42).unwrap().status_booking,
        BookingStatus::Approve
    );
    assert_eq!(notifier.kinds(), vec![NotificationKind::Error]);
}

#[tokio::test]
async fn test_table_release_failure_is_swallowed() {
    let api = Arc::new(RecordingApi {
        fail_table_update: true,
        ..Default::default()
    });
    let dialog = Arc::new(ScriptedDialog::new(Confirmation::Confirmed { note: None }));
    let notifier = Arc::new(RecordingNotifier::default());
    let (workflow, mut store) = workflow_with(api.clone(), dialog, notifier.clone());

    let outcome = workflow
        .request_transition(&mut store, request(BookingStatus::Succeed))
        .await
        .unwrap();

    // The booking is resolved even though the table bookkeeping lagged
    assert_eq!(outcome, TransitionOutcome::Committed);
    assert_eq!(
        store.get(42).unwrap().status_booking,
        BookingStatus::Succeed
    );
    assert_eq!(notifier.kinds(), vec![NotificationKind::Success]);
}
