//! Wallet Connectors
//!
//! This module defines the connector shape the dApp framework consumes.
//! Connectors implement the `WalletConnector` trait, providing:
//! - Connection lifecycle (connect, disconnect, authorization check)
//! - Account and chain queries
//! - Chain switching against the configured chain list
//! - Change notifications through an [`Emitter`]

pub mod emitter;
pub mod error;
pub mod silk;
pub mod types;

// Re-export commonly used items
pub use emitter::Emitter;
pub use error::ConnectorError;
pub use silk::SilkConnector;
pub use types::*;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::address::ChecksumAddress;
use crate::provider::WalletProvider;

/// Base trait for wallet connectors
#[async_trait]
pub trait WalletConnector: Send + Sync {
    /// Provider type the connector wraps
    type Provider: WalletProvider;

    /// Stable connector id
    fn id(&self) -> &str;

    /// Human readable name
    fn name(&self) -> &str;

    /// Connector type tag
    fn kind(&self) -> &str;

    /// Chains the connector was configured with
    fn chains(&self) -> &[Chain];

    /// Whether the wallet can simulate transactions
    fn supports_simulation(&self) -> bool;

    /// Receive the connector's events
    fn subscribe(&self) -> broadcast::Receiver<ConnectorEvent>;

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Connect the wallet, optionally switching to a requested chain
    async fn connect(&self, params: ConnectParams) -> Result<ConnectionResult, ConnectorError>;

    /// Detach from provider events
    async fn disconnect(&self) -> Result<(), ConnectorError>;

    /// Whether the wallet already exposes accounts; never fails
    async fn is_authorized(&self) -> bool;

    // =========================================================================
    // Queries
    // =========================================================================

    /// Get the underlying provider, constructing it on first use
    async fn get_provider(&self) -> Result<Arc<Self::Provider>, ConnectorError>;

    /// Get the wallet's accounts, checksummed
    async fn get_accounts(&self) -> Result<Vec<ChecksumAddress>, ConnectorError>;

    /// Get the active chain id
    async fn get_chain_id(&self) -> Result<u64, ConnectorError>;

    // =========================================================================
    // Chain management
    // =========================================================================

    /// Switch to a configured chain
    async fn switch_chain(&self, chain_id: u64) -> Result<Chain, ConnectorError>;
}
