//! Pure, synchronous form validators.
//!
//! Each validator inspects a form snapshot and returns the first applicable
//! violation, or the parsed [`Amount`] when the form is acceptable. Rules
//! run in a fixed order and the first match wins, so a form that is wrong
//! in several ways produces exactly one toast.
//!
//! Emptiness and length checks look at the raw strings; numeric checks go
//! through the strict [`Amount`] parser (locale-independent, two decimals).

use crate::application::ApplicationForm;
use crate::donation::DonationForm;
use crate::errors::FlowError;
use crate::types::Amount;

/// Minimum length of an application's purpose text, in characters,
/// counted on the raw (untrimmed) string.
pub const REASON_MIN_CHARS: usize = 50;

/// Check a donation form. Single rule: the amount must parse and be
/// strictly positive.
pub fn validate_donation(form: &DonationForm) -> Result<Amount, FlowError> {
    parse_positive_amount(&form.amount)
        .ok_or(FlowError::validation("amount", "Please enter a valid donation amount"))
}

/// Check an application form. Rules in order, first match wins:
///
/// 1. amount empty, or reason blank after trimming → missing fields;
/// 2. amount does not parse to a positive value → invalid amount;
/// 3. reason shorter than [`REASON_MIN_CHARS`] → reason too short.
pub fn validate_application(form: &ApplicationForm) -> Result<Amount, FlowError> {
    if form.amount.is_empty() || form.reason.trim().is_empty() {
        return Err(FlowError::validation(
            "reason",
            "Please fill in all required fields",
        ));
    }

    let amount = parse_positive_amount(&form.amount)
        .ok_or(FlowError::validation("amount", "Please enter a valid amount"))?;

    if form.reason.chars().count() < REASON_MIN_CHARS {
        return Err(FlowError::validation(
            "reason",
            "Please provide a more detailed reason (minimum 50 characters)",
        ));
    }

    Ok(amount)
}

fn parse_positive_amount(raw: &str) -> Option<Amount> {
    raw.parse::<Amount>().ok().filter(Amount::is_positive)
}
