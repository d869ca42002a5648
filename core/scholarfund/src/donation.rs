//! Donation flow.
//!
//! Orchestrates one submit attempt end to end: busy check, wallet gate,
//! validation, the simulated (or real) transport call, and exactly one
//! toast per outcome. See the crate docs for the shared attempt lifecycle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::notify::{NoticeKind, Notifier};
use crate::transport::SubmissionBackend;
use crate::types::{Category, SubmissionOutcome, QUICK_AMOUNTS};
use crate::validate::validate_donation;
use crate::wallet::WalletWatch;

/// User-entered donation fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonationForm {
    /// Raw decimal string as typed; parsed only at validation time.
    pub amount: String,
    pub category: Category,
}

/// One donation form instance and its submission controller.
///
/// Cheap to clone; clones share the same form state and busy flag, the way
/// multiple UI handles onto one mounted component would.
pub struct DonationFlow<B, N> {
    backend: Arc<B>,
    notifier: Arc<N>,
    wallet: WalletWatch,
    form: Arc<Mutex<DonationForm>>,
    busy: Arc<AtomicBool>,
}

impl<B, N> Clone for DonationFlow<B, N> {
    fn clone(&self) -> Self {
        DonationFlow {
            backend: Arc::clone(&self.backend),
            notifier: Arc::clone(&self.notifier),
            wallet: self.wallet.clone(),
            form: Arc::clone(&self.form),
            busy: Arc::clone(&self.busy),
        }
    }
}

impl<B: SubmissionBackend, N: Notifier> DonationFlow<B, N> {
    pub fn new(backend: Arc<B>, notifier: Arc<N>, wallet: WalletWatch) -> Self {
        DonationFlow {
            backend,
            notifier,
            wallet,
            form: Arc::new(Mutex::new(DonationForm::default())),
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    // ─── Form mutators ────────────────────────────────────

    pub fn set_amount(&self, amount: impl Into<String>) {
        self.lock_form().amount = amount.into();
    }

    /// Fill the amount from one of the preset buttons.
    pub fn set_quick_amount(&self, dollars: u32) {
        debug_assert!(QUICK_AMOUNTS.contains(&dollars));
        self.lock_form().amount = dollars.to_string();
    }

    pub fn set_category(&self, category: Category) {
        self.lock_form().category = category;
    }

    // ─── Introspection ────────────────────────────────────

    /// Snapshot of the current form fields.
    pub fn form(&self) -> DonationForm {
        self.lock_form().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Whether the submit affordance should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_busy() && self.wallet.connected()
    }

    /// Text for the submit affordance in its current state.
    pub fn submit_label(&self) -> String {
        if self.is_busy() {
            return "Processing...".to_string();
        }
        if !self.wallet.connected() {
            return "Connect Wallet to Donate".to_string();
        }
        let amount = self.lock_form().amount.clone();
        if amount.is_empty() {
            "Donate".to_string()
        } else {
            format!("Donate ${amount}")
        }
    }

    // ─── Submission ───────────────────────────────────────

    /// Run one submit attempt.
    ///
    /// Returns `None` when an attempt is already in flight — the busy flag
    /// is the mutual-exclusion mechanism, and a concurrent call is a no-op
    /// with no notification. Otherwise the outcome has already been
    /// surfaced through the notifier by the time it is returned.
    pub async fn submit(&self) -> Option<SubmissionOutcome> {
        if self.busy.swap(true, Ordering::AcqRel) {
            debug!("donation submit ignored: already in flight");
            return None;
        }
        let outcome = self.attempt().await;
        self.busy.store(false, Ordering::Release);
        Some(outcome)
    }

    async fn attempt(&self) -> SubmissionOutcome {
        // Gate before validation, unconditionally.
        if !self.wallet.connected() {
            self.notifier
                .notify(NoticeKind::Error, "Please connect your wallet first");
            return SubmissionOutcome::GateRejected;
        }

        let form = self.form();
        let amount = match validate_donation(&form) {
            Ok(amount) => amount,
            Err(err) => {
                self.notifier.notify(NoticeKind::Error, &err.to_string());
                return SubmissionOutcome::Rejected(err);
            }
        };

        match self.backend.submit_donation(amount, form.category).await {
            Ok(receipt) => {
                let message = format!(
                    "Successfully donated ${amount} to {}!",
                    form.category.label()
                );
                self.notifier.notify(NoticeKind::Success, &message);
                *self.lock_form() = DonationForm::default();
                debug!(receipt = receipt.id, "donation accepted");
                SubmissionOutcome::Accepted { receipt, message }
            }
            Err(err) => {
                // Form retained so the user can simply retry.
                self.notifier
                    .notify(NoticeKind::Error, "Donation failed. Please try again.");
                debug!(%err, "donation failed");
                SubmissionOutcome::Failed(err)
            }
        }
    }

    fn lock_form(&self) -> std::sync::MutexGuard<'_, DonationForm> {
        self.form.lock().expect("donation form lock poisoned")
    }
}
