//! Common types shared between the connector and the framework
//!
//! Chains use the framework's JSON shape (camelCase keys) so a chain list can
//! be handed over verbatim.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::address::ChecksumAddress;

/// Native currency of a chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// RPC endpoints for one transport set ("default", "public", ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcUrls {
    #[serde(default)]
    pub http: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub web_socket: Vec<String>,
}

/// Block explorer entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockExplorer {
    pub name: String,
    pub url: String,
}

/// A configured chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chain {
    pub id: u64,
    pub name: String,
    pub native_currency: NativeCurrency,
    #[serde(default)]
    pub rpc_urls: HashMap<String, RpcUrls>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_explorers: Option<HashMap<String, BlockExplorer>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testnet: Option<bool>,
}

impl Chain {
    /// Minimal chain with ETH as native currency and a single default RPC URL
    pub fn new(id: u64, name: &str, rpc_url: &str) -> Self {
        let mut rpc_urls = HashMap::new();
        rpc_urls.insert(
            "default".to_string(),
            RpcUrls {
                http: vec![rpc_url.to_string()],
                web_socket: Vec::new(),
            },
        );

        Self {
            id,
            name: name.to_string(),
            native_currency: NativeCurrency {
                name: "Ether".to_string(),
                symbol: "ETH".to_string(),
                decimals: 18,
            },
            rpc_urls,
            block_explorers: None,
            testnet: None,
        }
    }

    /// First HTTP URL of the default RPC set
    pub fn default_rpc_url(&self) -> Option<&str> {
        self.rpc_urls
            .get("default")
            .and_then(|urls| urls.http.first())
            .map(String::as_str)
    }
}

/// Parameters of `connect`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectParams {
    /// Chain to switch to after connecting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
}

impl ConnectParams {
    pub fn with_chain(chain_id: u64) -> Self {
        Self {
            chain_id: Some(chain_id),
        }
    }
}

/// Result of a successful `connect`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionResult {
    pub accounts: Vec<ChecksumAddress>,
    pub chain_id: u64,
}

/// Payload of a `message` event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Notifications emitted to the connector framework
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum ConnectorEvent {
    /// Informational message, e.g. `{ type: "connecting" }`
    Message(MessageEvent),
    /// Accounts and/or chain changed
    #[serde(rename_all = "camelCase")]
    Change {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        accounts: Option<Vec<ChecksumAddress>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        chain_id: Option<u64>,
    },
    /// Wallet disconnected
    Disconnect,
}

impl ConnectorEvent {
    pub fn connecting() -> Self {
        ConnectorEvent::Message(MessageEvent {
            kind: "connecting".to_string(),
            data: None,
        })
    }

    pub fn accounts_changed(accounts: Vec<ChecksumAddress>) -> Self {
        ConnectorEvent::Change {
            accounts: Some(accounts),
            chain_id: None,
        }
    }

    pub fn chain_changed(chain_id: u64) -> Self {
        ConnectorEvent::Change {
            accounts: None,
            chain_id: Some(chain_id),
        }
    }
}
