//! Toast-style notification sink.
//!
//! Logs every notice through `tracing` and retains only the most recent
//! one, the way a toast rail shows whatever arrived last.

use std::sync::Mutex;

use scholarfund::{NoticeKind, Notifier};
use tracing::{error, info};

#[derive(Debug, Default)]
pub struct ToastBar {
    current: Mutex<Option<(NoticeKind, String)>>,
}

impl ToastBar {
    /// The toast currently on screen, if any.
    pub fn current(&self) -> Option<(NoticeKind, String)> {
        self.current.lock().expect("toast lock poisoned").clone()
    }
}

impl Notifier for ToastBar {
    fn notify(&self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Success => info!(target: "toast", "{message}"),
            NoticeKind::Error => error!(target: "toast", "{message}"),
        }
        *self.current.lock().expect("toast lock poisoned") = Some((kind, message.to_string()));
    }
}
