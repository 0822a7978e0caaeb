//! JSON-RPC methods the connector sends to the wallet provider

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Provider request methods used by the connector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RpcMethod {
    #[serde(rename = "eth_accounts")]
    EthAccounts,
    #[serde(rename = "eth_chainId")]
    EthChainId,
    #[serde(rename = "wallet_switchEthereumChain")]
    WalletSwitchEthereumChain,
}

impl RpcMethod {
    /// Wire name of the method
    pub fn as_str(&self) -> &'static str {
        match self {
            RpcMethod::EthAccounts => "eth_accounts",
            RpcMethod::EthChainId => "eth_chainId",
            RpcMethod::WalletSwitchEthereumChain => "wallet_switchEthereumChain",
        }
    }
}

impl std::fmt::Display for RpcMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arguments of a single `request` call (EIP-1193 `RequestArguments`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestArguments {
    pub method: RpcMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl RequestArguments {
    /// A request without parameters
    pub fn new(method: RpcMethod) -> Self {
        Self { method, params: None }
    }

    /// A request with positional parameters
    pub fn with_params(method: RpcMethod, params: Vec<Value>) -> Self {
        Self {
            method,
            params: Some(Value::Array(params)),
        }
    }
}
