//! Workflow error taxonomy.
//!
//! Every error here is handled locally at the flow boundary and surfaced
//! as a single user-facing notification string; nothing propagates further
//! and nothing is fatal — a flow always returns to idle and stays usable.

use thiserror::Error;

/// The submission seam reported a failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("submission failed: {0}")]
pub struct TransportError(pub String);

/// The wallet connection seam refused to connect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("wallet connection failed: {0}")]
pub struct ConnectError(pub String);

/// Why a submit attempt did not reach the backend, or failed once there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    /// The wallet gate is closed; checked before any field validation.
    #[error("wallet not connected")]
    Gate,

    /// A field constraint failed. `message` is the exact toast text.
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl FlowError {
    pub(crate) const fn validation(field: &'static str, message: &'static str) -> Self {
        FlowError::Validation { field, message }
    }
}
