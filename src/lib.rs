//! silk-connector - Silk wallet adapter for dApp connector frameworks
//!
//! Wraps an EIP-1193 style Silk provider behind the [`WalletConnector`]
//! interface: lazy provider construction, login, chain switching against a
//! configured chain list, and re-emission of provider events.
//!
//! ```rust,ignore
//! use silk_connector::{ConnectParams, ConnectorConfig, SilkConnector, WalletConnector};
//!
//! let connector = SilkConnector::new(config, |referral: Option<&str>| init_silk(referral));
//! let mut events = connector.subscribe();
//! let session = connector.connect(ConnectParams::with_chain(137)).await?;
//! ```

pub mod address;
pub mod config;
pub mod connectors;
pub mod provider;

pub use address::ChecksumAddress;
pub use config::ConnectorConfig;
pub use connectors::{
    Chain, ConnectParams, ConnectionResult, ConnectorError, ConnectorEvent, Emitter,
    SilkConnector, WalletConnector,
};
pub use provider::{ProviderError, ProviderFactory, WalletProvider};
