//! # ScholarFund workflow core
//!
//! The submission workflow behind the ScholarFund demo site: two sibling
//! flows — [`DonationFlow`] and [`ApplicationFlow`] — that share one
//! attempt lifecycle over pluggable seams.
//!
//! | Phase      | Component                                     |
//! |------------|-----------------------------------------------|
//! | Gate       | [`wallet::WalletWatch`] (connection required) |
//! | Validate   | [`validate`] (pure, first violation wins)     |
//! | Submit     | [`transport::SubmissionBackend`]              |
//! | Notify     | [`notify::Notifier`] (one toast per outcome)  |
//!
//! ## Attempt lifecycle
//!
//! ```text
//! Idle ──submit──► Validating ──pass──► Submitting ──ok───► Settled(reset form)
//!                     │   │                          └err─► Settled(keep form)
//!                     │   └─gate closed──► rejected, keep form
//!                     └─field invalid────► rejected, keep form
//! ```
//!
//! Exactly one attempt may be in flight per flow instance; the busy flag is
//! the mutual-exclusion mechanism, and a concurrent `submit` is a silent
//! no-op. There is no cancellation, no timeout, and no automatic retry —
//! every path settles back to idle with the flow still usable.
//!
//! ## Seams
//!
//! The core never assumes anything about its collaborators beyond their
//! signatures: the transport returns `Result<Receipt, TransportError>`,
//! the wallet connector returns `Result<WalletInfo, ConnectError>`, and
//! the notifier is fire-and-forget. The bundled [`SimulatedBackend`] and
//! [`MockConnector`] stand in for the real integrations.

pub mod application;
pub mod donation;
pub mod errors;
pub mod notify;
pub mod transport;
pub mod types;
pub mod validate;
pub mod wallet;

#[cfg(test)]
mod testutil;

#[cfg(test)]
mod test_application;

pub use application::{ApplicationFlow, ApplicationForm, REASON_MAX_CHARS};
pub use donation::{DonationFlow, DonationForm};
pub use errors::{ConnectError, FlowError, TransportError};
pub use notify::{NoticeKind, Notifier};
pub use transport::{SimulatedBackend, SubmissionBackend};
pub use types::{Amount, Category, Receipt, SubmissionKind, SubmissionOutcome, QUICK_AMOUNTS};
pub use wallet::{
    short_address, ConnectionState, MockConnector, WalletConnector, WalletSession, WalletWatch,
    MOCK_ADDRESS,
};
