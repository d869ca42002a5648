//! Submission transport seam.
//!
//! The flows orchestrate calls through [`SubmissionBackend`] and treat it
//! opaquely: the only contract is the `Result`-shaped return. The bundled
//! [`SimulatedBackend`] stands in for a real transaction with a fixed
//! delay, records every call for test observability, and can be armed to
//! fail so the error path stays reachable.

use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use tracing::debug;

use crate::errors::TransportError;
use crate::types::{Amount, Category, Receipt, SubmissionKind};

/// Seam a flow submits through once the gate and validators pass.
pub trait SubmissionBackend: Send + Sync {
    fn submit_donation(
        &self,
        amount: Amount,
        category: Category,
    ) -> impl Future<Output = Result<Receipt, TransportError>> + Send;

    fn submit_application(
        &self,
        amount: Amount,
        category: Category,
        reason: &str,
    ) -> impl Future<Output = Result<Receipt, TransportError>> + Send;
}

/// Arguments of one backend call, as observed by [`SimulatedBackend`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub kind: SubmissionKind,
    pub amount: Amount,
    pub category: Category,
    pub reason: Option<String>,
}

/// In-process stand-in for the (future) on-chain submission transport.
///
/// Sleeps for a configurable delay — two seconds by default, matching the
/// simulated transaction it replaces — then acknowledges with a sequential
/// receipt. `fail_next` arms a one-shot failure for the next call.
pub struct SimulatedBackend {
    delay: Duration,
    fail_next: AtomicBool,
    next_id: AtomicU64,
    calls: Mutex<Vec<RecordedCall>>,
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedBackend {
    pub fn new() -> Self {
        Self::with_delay(Duration::from_secs(2))
    }

    pub fn with_delay(delay: Duration) -> Self {
        SimulatedBackend {
            delay,
            fail_next: AtomicBool::new(false),
            next_id: AtomicU64::new(1),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Make the next submission fail with a simulated transport error.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Every call seen so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("call log poisoned").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("call log poisoned").len()
    }

    async fn settle(&self, call: RecordedCall) -> Result<Receipt, TransportError> {
        self.calls
            .lock()
            .expect("call log poisoned")
            .push(call.clone());

        tokio::time::sleep(self.delay).await;

        if self.fail_next.swap(false, Ordering::SeqCst) {
            debug!(kind = ?call.kind, "simulated transport failure");
            return Err(TransportError("simulated transaction failure".into()));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        debug!(kind = ?call.kind, id, "simulated transport accepted");
        Ok(Receipt {
            id,
            kind: call.kind,
            amount: call.amount,
            category: call.category,
            reason: call.reason,
        })
    }
}

impl SubmissionBackend for SimulatedBackend {
    async fn submit_donation(
        &self,
        amount: Amount,
        category: Category,
    ) -> Result<Receipt, TransportError> {
        self.settle(RecordedCall {
            kind: SubmissionKind::Donation,
            amount,
            category,
            reason: None,
        })
        .await
    }

    async fn submit_application(
        &self,
        amount: Amount,
        category: Category,
        reason: &str,
    ) -> Result<Receipt, TransportError> {
        self.settle(RecordedCall {
            kind: SubmissionKind::Application,
            amount,
            category,
            reason: Some(reason.to_string()),
        })
        .await
    }
}
