//! Wallet connection state and the connection gate.
//!
//! The top level owns a [`WalletSession`] and mutates it through the
//! header's connect/disconnect actions. Each flow receives a read-only
//! [`WalletWatch`] handle at construction time — an explicit capability
//! rather than ambient global state — and consults it as the gate on
//! every submit attempt.
//!
//! Invariant: the session holds a non-empty address exactly when it is
//! connected. This is structural (`Option<String>` with empty addresses
//! rejected at connect), so no caller can observe a half-connected state.

use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::errors::ConnectError;
use crate::notify::{NoticeKind, Notifier};

/// Address handed out by the mock connector; a real integration would
/// obtain this from the wallet extension instead.
pub const MOCK_ADDRESS: &str = "SP1K1A1PMGW2ZJCNF46NWZWHG8TS1D23FGH0S7H6T";

/// Successful result of the connection seam.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletInfo {
    pub address: String,
}

/// Seam through which a wallet connection is established.
pub trait WalletConnector: Send + Sync {
    fn connect(&self) -> impl std::future::Future<Output = Result<WalletInfo, ConnectError>> + Send;
}

/// Demo connector: always "connects" to a fixed address,
/// [`MOCK_ADDRESS`] by default.
#[derive(Debug, Clone)]
pub struct MockConnector {
    address: String,
}

impl MockConnector {
    pub fn new(address: impl Into<String>) -> Self {
        MockConnector {
            address: address.into(),
        }
    }
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new(MOCK_ADDRESS)
    }
}

impl WalletConnector for MockConnector {
    async fn connect(&self) -> Result<WalletInfo, ConnectError> {
        Ok(WalletInfo {
            address: self.address.clone(),
        })
    }
}

/// Read-only snapshot of the connection state at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionState {
    pub connected: bool,
    pub address: String,
}

/// Owner side of the connection state.
///
/// Cheap to clone; all clones observe the same underlying state.
#[derive(Debug, Clone, Default)]
pub struct WalletSession {
    address: Arc<RwLock<Option<String>>>,
}

impl WalletSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect through `connector`, surfacing the outcome as a toast.
    pub async fn connect<C: WalletConnector, N: Notifier>(
        &self,
        connector: &C,
        notifier: &N,
    ) -> Result<ConnectionState, ConnectError> {
        let info = match connector.connect().await {
            Ok(info) if info.address.is_empty() => {
                notifier.notify(NoticeKind::Error, "Failed to connect wallet");
                return Err(ConnectError("connector returned an empty address".into()));
            }
            Ok(info) => info,
            Err(e) => {
                notifier.notify(NoticeKind::Error, "Failed to connect wallet");
                return Err(e);
            }
        };

        debug!(address = %info.address, "wallet connected");
        *self.address.write().expect("wallet lock poisoned") = Some(info.address);
        notifier.notify(NoticeKind::Success, "Wallet connected successfully!");
        Ok(self.snapshot())
    }

    /// Drop the connection, if any.
    pub fn disconnect<N: Notifier>(&self, notifier: &N) {
        *self.address.write().expect("wallet lock poisoned") = None;
        debug!("wallet disconnected");
        notifier.notify(NoticeKind::Success, "Wallet disconnected");
    }

    pub fn is_connected(&self) -> bool {
        self.address
            .read()
            .expect("wallet lock poisoned")
            .is_some()
    }

    /// Current state as an immutable snapshot.
    pub fn snapshot(&self) -> ConnectionState {
        let guard = self.address.read().expect("wallet lock poisoned");
        ConnectionState {
            connected: guard.is_some(),
            address: guard.clone().unwrap_or_default(),
        }
    }

    /// Read-only handle to hand to a flow.
    pub fn watch(&self) -> WalletWatch {
        WalletWatch {
            address: Arc::clone(&self.address),
        }
    }
}

/// Read-only view of a [`WalletSession`]; this is the connection gate
/// a flow evaluates before validating anything.
#[derive(Debug, Clone)]
pub struct WalletWatch {
    address: Arc<RwLock<Option<String>>>,
}

impl WalletWatch {
    pub fn connected(&self) -> bool {
        self.address
            .read()
            .expect("wallet lock poisoned")
            .is_some()
    }

    pub fn snapshot(&self) -> ConnectionState {
        let guard = self.address.read().expect("wallet lock poisoned");
        ConnectionState {
            connected: guard.is_some(),
            address: guard.clone().unwrap_or_default(),
        }
    }
}

/// Truncate an address for header display: first six chars, an ellipsis,
/// last four. Addresses too short to truncate are shown whole.
pub fn short_address(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}
