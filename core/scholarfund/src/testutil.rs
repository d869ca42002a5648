//! Shared test fixtures.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::notify::{NoticeKind, Notifier};
use crate::transport::SimulatedBackend;
use crate::wallet::{MockConnector, WalletSession};

/// Notifier that records every toast for later assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<(NoticeKind, String)>>,
}

impl RecordingNotifier {
    pub fn last(&self) -> Option<(NoticeKind, String)> {
        self.notices.lock().unwrap().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.notices.lock().unwrap().len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push((kind, message.to_string()));
    }
}

/// Backend, notifier, and a wallet session, with no delay on the backend.
pub fn seams() -> (Arc<SimulatedBackend>, Arc<RecordingNotifier>, WalletSession) {
    (
        Arc::new(SimulatedBackend::with_delay(Duration::ZERO)),
        Arc::new(RecordingNotifier::default()),
        WalletSession::new(),
    )
}

/// Same as [`seams`], with the wallet already connected. The connect toast
/// goes to a scratch notifier so the returned one starts empty.
pub async fn connected_seams() -> (Arc<SimulatedBackend>, Arc<RecordingNotifier>, WalletSession) {
    let (backend, notifier, session) = seams();
    session
        .connect(&MockConnector::default(), &RecordingNotifier::default())
        .await
        .expect("mock connect never fails");
    (backend, notifier, session)
}
