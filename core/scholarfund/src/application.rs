//! Scholarship application flow.
//!
//! Same attempt lifecycle as the donation flow, over a larger form: the
//! requested amount, the target field of study, and a purpose text that
//! must run at least 50 characters and is capped at 500.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::notify::{NoticeKind, Notifier};
use crate::transport::SubmissionBackend;
use crate::types::{Category, SubmissionOutcome};
use crate::validate::validate_application;
use crate::wallet::WalletWatch;

/// Upper bound on the purpose text, in characters. Input beyond this is
/// truncated at the mutator, mirroring the form's character counter.
pub const REASON_MAX_CHARS: usize = 500;

/// User-entered application fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationForm {
    /// Raw decimal string as typed; parsed only at validation time.
    pub amount: String,
    /// Purpose text, bounded to [`REASON_MAX_CHARS`].
    pub reason: String,
    pub category: Category,
}

/// One application form instance and its submission controller.
///
/// Cheap to clone; clones share the same form state and busy flag.
pub struct ApplicationFlow<B, N> {
    backend: Arc<B>,
    notifier: Arc<N>,
    wallet: WalletWatch,
    form: Arc<Mutex<ApplicationForm>>,
    busy: Arc<AtomicBool>,
}

impl<B, N> Clone for ApplicationFlow<B, N> {
    fn clone(&self) -> Self {
        ApplicationFlow {
            backend: Arc::clone(&self.backend),
            notifier: Arc::clone(&self.notifier),
            wallet: self.wallet.clone(),
            form: Arc::clone(&self.form),
            busy: Arc::clone(&self.busy),
        }
    }
}

impl<B: SubmissionBackend, N: Notifier> ApplicationFlow<B, N> {
    pub fn new(backend: Arc<B>, notifier: Arc<N>, wallet: WalletWatch) -> Self {
        ApplicationFlow {
            backend,
            notifier,
            wallet,
            form: Arc::new(Mutex::new(ApplicationForm::default())),
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    // ─── Form mutators ────────────────────────────────────

    pub fn set_amount(&self, amount: impl Into<String>) {
        self.lock_form().amount = amount.into();
    }

    /// Set the purpose text, truncating at [`REASON_MAX_CHARS`] characters.
    pub fn set_reason(&self, reason: impl Into<String>) {
        let mut reason: String = reason.into();
        if reason.chars().count() > REASON_MAX_CHARS {
            reason = reason.chars().take(REASON_MAX_CHARS).collect();
        }
        self.lock_form().reason = reason;
    }

    pub fn set_category(&self, category: Category) {
        self.lock_form().category = category;
    }

    // ─── Introspection ────────────────────────────────────

    /// Snapshot of the current form fields.
    pub fn form(&self) -> ApplicationForm {
        self.lock_form().clone()
    }

    /// Character count shown next to the purpose field.
    pub fn reason_chars(&self) -> usize {
        self.lock_form().reason.chars().count()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Whether the submit affordance should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_busy() && self.wallet.connected()
    }

    /// Text for the submit affordance in its current state.
    pub fn submit_label(&self) -> &'static str {
        if self.is_busy() {
            "Submitting..."
        } else if !self.wallet.connected() {
            "Connect Wallet to Apply"
        } else {
            "Submit Application"
        }
    }

    // ─── Submission ───────────────────────────────────────

    /// Run one submit attempt.
    ///
    /// `None` means an attempt was already in flight and this call was a
    /// silent no-op; see [`DonationFlow::submit`](crate::DonationFlow::submit).
    pub async fn submit(&self) -> Option<SubmissionOutcome> {
        if self.busy.swap(true, Ordering::AcqRel) {
            debug!("application submit ignored: already in flight");
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
        let amount = match validate_application(&form) {
            Ok(amount) => amount,
            Err(err) => {
                self.notifier.notify(NoticeKind::Error, &err.to_string());
                return SubmissionOutcome::Rejected(err);
            }
        };

        match self
            .backend
            .submit_application(amount, form.category, &form.reason)
            .await
        {
            Ok(receipt) => {
                let message =
                    "Application submitted successfully! You will hear back within 7 days."
                        .to_string();
                self.notifier.notify(NoticeKind::Success, &message);
                *self.lock_form() = ApplicationForm::default();
                debug!(receipt = receipt.id, "application accepted");
                SubmissionOutcome::Accepted { receipt, message }
            }
            Err(err) => {
                // Form retained so the user can simply retry.
                self.notifier.notify(
                    NoticeKind::Error,
                    "Application submission failed. Please try again.",
                );
                debug!(%err, "application failed");
                SubmissionOutcome::Failed(err)
            }
        }
    }

    fn lock_form(&self) -> std::sync::MutexGuard<'_, ApplicationForm> {
        self.form.lock().expect("application form lock poisoned")
    }
}
