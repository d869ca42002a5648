//! Demo configuration loaded from environment variables.

use anyhow::{Context, Result};
use scholarfund::MOCK_ADDRESS;

#[derive(Debug, Clone)]
pub struct Config {
    /// Simulated transaction delay in milliseconds.
    pub submit_delay_ms: u64,
    /// Address the mock connector hands out.
    pub wallet_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            submit_delay_ms: std::env::var("SUBMIT_DELAY_MS")
                .unwrap_or_else(|_| "2000".to_string())
                .parse()
                .context("Invalid SUBMIT_DELAY_MS")?,
            wallet_address: std::env::var("WALLET_ADDRESS")
                .unwrap_or_else(|_| MOCK_ADDRESS.to_string()),
        })
    }
}
