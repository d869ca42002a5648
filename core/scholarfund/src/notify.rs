//! Notification sink seam.
//!
//! Flows surface every outcome as one human-readable toast through this
//! trait. Calls are fire-and-forget: no acknowledgement, no queueing
//! guarantee beyond "most recent call wins visually", and the flows never
//! inspect anything about the sink.

/// Visual flavour of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Something that can show a transient message to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, message: &str);
}
