//! Wallet provider seam
//!
//! The Silk SDK (key management, login UI, transport, chain switching) lives
//! outside this crate. The connector only talks to it through the
//! [`WalletProvider`] trait, an EIP-1193 shaped surface:
//! - `request` for JSON-RPC calls
//! - `login` / `is_connected` for the authentication flow
//! - `on` / `remove_listener` for provider events

pub mod methods;

#[cfg(test)]
pub(crate) mod mock;

pub use methods::{RequestArguments, RpcMethod};

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

/// EIP-1193 error code: the user rejected the request
pub const USER_REJECTED_CODE: i64 = 4001;

/// EIP-1193 error code: the requested chain has not been added to the wallet
pub const UNRECOGNIZED_CHAIN_CODE: i64 = 4902;

/// Error returned by the wallet provider
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Provider error [{code}]: {message}")]
pub struct ProviderError {
    pub code: i64,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Shorthand for a 4001 rejection
    pub fn user_rejected(message: impl Into<String>) -> Self {
        Self::new(USER_REJECTED_CODE, message)
    }

    pub fn is_user_rejection(&self) -> bool {
        self.code == USER_REJECTED_CODE
    }
}

/// Provider event names the connector listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderEventKind {
    AccountsChanged,
    ChainChanged,
    Disconnect,
}

impl ProviderEventKind {
    /// Event name as the provider emits it
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderEventKind::AccountsChanged => "accountsChanged",
            ProviderEventKind::ChainChanged => "chainChanged",
            ProviderEventKind::Disconnect => "disconnect",
        }
    }
}

impl std::fmt::Display for ProviderEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event payloads, exactly as the provider delivers them
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderEvent {
    /// Raw (not yet checksummed) account list
    AccountsChanged(Vec<String>),
    /// Chain identifier, usually a hex string
    ChainChanged(Value),
    Disconnect,
}

impl ProviderEvent {
    pub fn kind(&self) -> ProviderEventKind {
        match self {
            ProviderEvent::AccountsChanged(_) => ProviderEventKind::AccountsChanged,
            ProviderEvent::ChainChanged(_) => ProviderEventKind::ChainChanged,
            ProviderEvent::Disconnect => ProviderEventKind::Disconnect,
        }
    }
}

/// Callback registered with the provider
pub type ProviderListener = Arc<dyn Fn(ProviderEvent) + Send + Sync>;

/// Handle returned by [`WalletProvider::on`], used to remove the listener later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// EIP-1193 style wallet provider
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Send a JSON-RPC request
    async fn request(&self, args: RequestArguments) -> Result<Value, ProviderError>;

    /// Whether the user is already authenticated with the wallet
    fn is_connected(&self) -> bool;

    /// Start the wallet's login flow
    async fn login(&self) -> Result<(), ProviderError>;

    /// Register a listener for one event kind
    fn on(&self, kind: ProviderEventKind, listener: ProviderListener) -> ListenerId;

    /// Remove a listener previously registered with [`WalletProvider::on`]
    fn remove_listener(&self, kind: ProviderEventKind, id: ListenerId);
}

/// Constructs the provider on first use.
///
/// Any `Fn(Option<&str>) -> Result<P, ProviderError>` is a factory, so
/// wrapping an SDK's init function is a one-liner.
#[async_trait]
pub trait ProviderFactory: Send + Sync {
    type Provider: WalletProvider + 'static;

    async fn create(&self, referral_code: Option<&str>) -> Result<Self::Provider, ProviderError>;
}

#[async_trait]
impl<F, P> ProviderFactory for F
where
    F: Fn(Option<&str>) -> Result<P, ProviderError> + Send + Sync,
    P: WalletProvider + 'static,
{
    type Provider = P;

    async fn create(&self, referral_code: Option<&str>) -> Result<P, ProviderError> {
        (self)(referral_code)
    }
}
