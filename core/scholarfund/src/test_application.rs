//! End-to-end tests for the application flow.

use std::sync::Arc;
use std::time::Duration;

use crate::application::{ApplicationFlow, ApplicationForm, REASON_MAX_CHARS};
use crate::errors::FlowError;
use crate::notify::NoticeKind;
use crate::testutil::{connected_seams, seams, RecordingNotifier};
use crate::transport::SimulatedBackend;
use crate::types::{Amount, Category, SubmissionKind, SubmissionOutcome};

fn long_reason() -> String {
    "I am completing my final year of nursing school and need help covering tuition.".to_string()
}

#[tokio::test]
async fn gate_rejection_precedes_validation() {
    let (backend, notifier, session) = seams();
    let flow = ApplicationFlow::new(backend.clone(), notifier.clone(), session.watch());

    flow.set_amount("200");
    flow.set_reason(long_reason());

    let outcome = flow.submit().await.unwrap();
    assert_eq!(outcome, SubmissionOutcome::GateRejected);
    assert_eq!(
        notifier.last(),
        Some((NoticeKind::Error, "Please connect your wallet first".into()))
    );
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn missing_fields_are_rejected_first() {
    let (backend, notifier, session) = connected_seams().await;
    let flow = ApplicationFlow::new(backend.clone(), notifier.clone(), session.watch());

    // Amount present, reason blank.
    flow.set_amount("200");
    flow.set_reason("   ");
    let outcome = flow.submit().await.unwrap();
    assert!(matches!(outcome, SubmissionOutcome::Rejected(_)));
    assert_eq!(
        notifier.last(),
        Some((NoticeKind::Error, "Please fill in all required fields".into()))
    );
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn short_reason_is_rejected_and_form_unchanged() {
    let (backend, notifier, session) = connected_seams().await;
    let flow = ApplicationFlow::new(backend.clone(), notifier.clone(), session.watch());

    let forty_nine = "x".repeat(49);
    flow.set_amount("200");
    flow.set_reason(&forty_nine);
    flow.set_category(Category::Arts);

    let outcome = flow.submit().await.unwrap();
    assert!(matches!(
        outcome,
        SubmissionOutcome::Rejected(FlowError::Validation { field: "reason", .. })
    ));
    assert_eq!(
        notifier.last(),
        Some((
            NoticeKind::Error,
            "Please provide a more detailed reason (minimum 50 characters)".into()
        ))
    );

    // Unchanged form.
    let form = flow.form();
    assert_eq!(form.amount, "200");
    assert_eq!(form.reason, forty_nine);
    assert_eq!(form.category, Category::Arts);
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn successful_application_resets_all_fields() {
    let (backend, notifier, session) = connected_seams().await;
    let flow = ApplicationFlow::new(backend.clone(), notifier.clone(), session.watch());

    flow.set_amount("200");
    flow.set_reason(long_reason());
    flow.set_category(Category::Medical);

    let outcome = flow.submit().await.unwrap();
    match outcome {
        SubmissionOutcome::Accepted { receipt, message } => {
            assert_eq!(
                message,
                "Application submitted successfully! You will hear back within 7 days."
            );
            assert_eq!(receipt.kind, SubmissionKind::Application);
            assert_eq!(receipt.amount, Amount::from_dollars(200));
            assert_eq!(receipt.category, Category::Medical);
            assert_eq!(receipt.reason.as_deref(), Some(long_reason().as_str()));
        }
        other => panic!("expected acceptance, got {other:?}"),
    }

    // All three fields back to defaults.
    assert_eq!(flow.form(), ApplicationForm::default());
}

#[tokio::test]
async fn transport_failure_retains_form() {
    let (backend, notifier, session) = connected_seams().await;
    let flow = ApplicationFlow::new(backend.clone(), notifier.clone(), session.watch());

    flow.set_amount("200");
    flow.set_reason(long_reason());
    backend.fail_next();

    let outcome = flow.submit().await.unwrap();
    assert!(matches!(outcome, SubmissionOutcome::Failed(_)));
    assert_eq!(
        notifier.last(),
        Some((
            NoticeKind::Error,
            "Application submission failed. Please try again.".into()
        ))
    );
    assert_eq!(flow.form().amount, "200");
    assert_eq!(flow.form().reason, long_reason());
}

#[tokio::test]
async fn second_submit_while_busy_is_a_no_op() {
    let backend = Arc::new(SimulatedBackend::with_delay(Duration::from_millis(50)));
    let notifier = Arc::new(RecordingNotifier::default());
    let session = crate::wallet::WalletSession::new();
    session
        .connect(&crate::wallet::MockConnector::default(), &RecordingNotifier::default())
        .await
        .unwrap();

    let flow = ApplicationFlow::new(backend.clone(), notifier.clone(), session.watch());
    flow.set_amount("200");
    flow.set_reason(long_reason());

    let twin = flow.clone();
    let (first, second) = tokio::join!(flow.submit(), twin.submit());

    let outcomes = [first, second];
    assert_eq!(outcomes.iter().filter(|o| o.is_some()).count(), 1);
    assert_eq!(backend.call_count(), 1);
    assert_eq!(notifier.count(), 1);
}

#[tokio::test]
async fn reason_is_truncated_at_the_bound() {
    let (backend, notifier, session) = connected_seams().await;
    let flow = ApplicationFlow::new(backend, notifier, session.watch());

    flow.set_reason("y".repeat(REASON_MAX_CHARS + 25));
    assert_eq!(flow.reason_chars(), REASON_MAX_CHARS);
}

#[tokio::test]
async fn affordance_tracks_connection_state() {
    let (backend, notifier, session) = seams();
    let flow = ApplicationFlow::new(backend, notifier.clone(), session.watch());

    assert!(!flow.can_submit());
    assert_eq!(flow.submit_label(), "Connect Wallet to Apply");

    session
        .connect(&crate::wallet::MockConnector::default(), &*notifier)
        .await
        .unwrap();
    assert!(flow.can_submit());
    assert_eq!(flow.submit_label(), "Submit Application");
}
