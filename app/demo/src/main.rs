//! ScholarFund demo — entry point.
//!
//! Scripted console walkthrough of both submission flows against the
//! simulated seams: a gate rejection while disconnected, a wallet connect,
//! a quick-amount donation, an application that is first rejected for a
//! short purpose text and then accepted, and one simulated transport
//! failure to show the error path.

mod config;
mod toast;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use scholarfund::{
    short_address, ApplicationFlow, Category, DonationFlow, MockConnector, SimulatedBackend,
    SubmissionOutcome, WalletSession,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use toast::ToastBar;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise structured logging (RUST_LOG controls verbosity).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load optional .env file (ignored if missing).
    let _ = dotenvy::dotenv();

    // Load config from environment.
    let config = Config::from_env()?;

    let backend = Arc::new(SimulatedBackend::with_delay(Duration::from_millis(
        config.submit_delay_ms,
    )));
    let toasts = Arc::new(ToastBar::default());
    let session = WalletSession::new();

    let donation = DonationFlow::new(backend.clone(), toasts.clone(), session.watch());
    let application = ApplicationFlow::new(backend.clone(), toasts.clone(), session.watch());

    // ─── Gate: submitting while disconnected ──────────────
    donation.set_quick_amount(50);
    donation.set_category(Category::Engineering);
    info!("submit while disconnected → {}", donation.submit_label());
    donation.submit().await;

    // ─── Connect the mock wallet ──────────────────────────
    let connector = MockConnector::new(config.wallet_address.clone());
    let state = session.connect(&connector, &*toasts).await?;
    info!("connected as {}", short_address(&state.address));

    // ─── Donation: quick amount, engineering ──────────────
    if let Some(SubmissionOutcome::Accepted { receipt, .. }) = donation.submit().await {
        info!("receipt: {}", serde_json::to_string(&receipt)?);
    }

    // ─── Application: rejected, then accepted ─────────────
    application.set_amount("200");
    application.set_category(Category::Medical);
    application.set_reason("Tuition help");
    application.submit().await;

    application.set_reason(
        "I am in my final year of nursing school and this scholarship would \
         cover my remaining tuition and certification exam fees.",
    );
    if let Some(SubmissionOutcome::Accepted { receipt, .. }) = application.submit().await {
        info!("receipt: {}", serde_json::to_string(&receipt)?);
    }

    // ─── Simulated transport failure ──────────────────────
    backend.fail_next();
    donation.set_amount("25");
    donation.submit().await;
    info!("form retained after failure: amount={}", donation.form().amount);

    session.disconnect(&*toasts);
    info!("walkthrough complete, {} backend calls", backend.call_count());

    Ok(())
}
