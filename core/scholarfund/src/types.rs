//! # Types
//!
//! Shared domain data used across both submission flows.
//!
//! ## Design decisions
//!
//! ### Amounts as two-decimal fixed point
//!
//! User input arrives as a free-form decimal string. Rather than carrying a
//! float through the pipeline, [`Amount`] stores USD minor units (`i64`
//! cents) and parses strictly: at most two fractional digits, no exponent
//! notation. Anything that fails to parse is treated as an invalid amount
//! by the validators, never silently coerced.
//!
//! ### Categories as a closed enum
//!
//! The scholarship categories are a fixed catalogue. [`Category`] carries
//! both the short wire id (`"engineering"`) and the human label
//! (`"Engineering"`) so success notifications and serialized receipts stay
//! consistent.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::errors::{FlowError, TransportError};

/// Scholarship categories a donation or application can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// The unrestricted general-education fund.
    General,
    Engineering,
    /// Medical studies.
    Medical,
    /// Arts & humanities.
    Arts,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 4] = [
        Category::General,
        Category::Engineering,
        Category::Medical,
        Category::Arts,
    ];

    /// Parse the short id used by the selection UI, if recognised.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "general" => Some(Self::General),
            "engineering" => Some(Self::Engineering),
            "medical" => Some(Self::Medical),
            "arts" => Some(Self::Arts),
            _ => None,
        }
    }

    /// Short identifier string, stable across the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Engineering => "engineering",
            Self::Medical => "medical",
            Self::Arts => "arts",
        }
    }

    /// Human-readable label shown in notifications.
    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "General Education",
            Self::Engineering => "Engineering",
            Self::Medical => "Medical Studies",
            Self::Arts => "Arts & Humanities",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::General
    }
}

/// Preset donation amounts (USD) offered as one-click choices.
pub const QUICK_AMOUNTS: [u32; 5] = [10, 50, 100, 500, 1000];

// ─────────────────────────────────────────────────────────
// Amount
// ─────────────────────────────────────────────────────────

/// A USD amount in minor units (cents).
///
/// Parsed from user input via [`FromStr`]; see the module docs for the
/// accepted grammar. Displays whole-dollar values without a fraction
/// (`"50"`), everything else with two digits (`"50.25"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(i64);

/// Raised when an amount string does not parse as a two-decimal value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a valid amount")]
pub struct ParseAmountError;

impl Amount {
    /// Construct from whole cents.
    pub const fn from_cents(cents: i64) -> Self {
        Amount(cents)
    }

    /// Construct from whole dollars.
    pub const fn from_dollars(dollars: i64) -> Self {
        Amount(dollars * 100)
    }

    /// The raw minor-unit value.
    pub const fn cents(&self) -> i64 {
        self.0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl FromStr for Amount {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((w, f)) => (w, f),
            None => (digits, ""),
        };

        // "50", "50.", ".5" are all fine; "" and "." are not.
        if whole.is_empty() && frac.is_empty() {
            return Err(ParseAmountError);
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseAmountError);
        }
        if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseAmountError);
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| ParseAmountError)?
        };
        let cents_frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| ParseAmountError)? * 10,
            _ => frac.parse().map_err(|_| ParseAmountError)?,
        };

        let cents = dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents_frac))
            .ok_or(ParseAmountError)?;

        Ok(Amount(if negative { -cents } else { cents }))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        if abs % 100 == 0 {
            write!(f, "{sign}{}", abs / 100)
        } else {
            write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
        }
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ─────────────────────────────────────────────────────────
// Submission results
// ─────────────────────────────────────────────────────────

/// Which flow produced a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionKind {
    Donation,
    Application,
}

/// Acknowledgement returned by the transport seam on success.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    /// Sequential id assigned by the backend.
    pub id: u64,
    pub kind: SubmissionKind,
    pub amount: Amount,
    pub category: Category,
    /// Application purpose text; absent for donations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Result of one submit attempt, consumed immediately by the caller.
///
/// Never persisted; the notification sink has already been told by the
/// time a flow hands this back.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// The backend accepted the submission; the form has been reset.
    Accepted { receipt: Receipt, message: String },
    /// A field constraint failed; the form is unchanged.
    Rejected(FlowError),
    /// The wallet gate refused the attempt before validation ran.
    GateRejected,
    /// The backend reported a failure; the form is retained.
    Failed(TransportError),
}
