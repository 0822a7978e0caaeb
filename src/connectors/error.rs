//! Connector Error Types
//!
//! The error kinds surfaced to the connector framework.

use std::fmt;

use crate::provider::ProviderError;

/// Errors returned by wallet connector operations
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectorError {
    /// The user rejected a login or a request in the wallet UI
    UserRejected(String),

    /// Requested chain is not part of the configured chain list
    ChainNotConfigured(u64),

    /// Switching chains failed; wraps the underlying cause
    SwitchChain(Box<ConnectorError>),

    /// Provider request failed
    Provider(ProviderError),

    /// Provider returned something that is not an address
    InvalidAddress(String),

    /// Provider returned a payload that could not be parsed
    Parse(String),
}

impl ConnectorError {
    /// Whether this error (or the error a switch-chain failure wraps) is a user rejection
    pub fn is_user_rejection(&self) -> bool {
        match self {
            ConnectorError::UserRejected(_) => true,
            ConnectorError::Provider(err) => err.is_user_rejection(),
            ConnectorError::SwitchChain(inner) => inner.is_user_rejection(),
            _ => false,
        }
    }

    /// Wrap an error as a switch-chain failure (idempotent)
    pub fn switch_chain(err: ConnectorError) -> Self {
        match err {
            wrapped @ ConnectorError::SwitchChain(_) => wrapped,
            other => ConnectorError::SwitchChain(Box::new(other)),
        }
    }
}

impl fmt::Display for ConnectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectorError::UserRejected(msg) => write!(f, "User rejected the request: {}", msg),
            ConnectorError::ChainNotConfigured(id) => write!(f, "Chain {} not configured", id),
            ConnectorError::SwitchChain(inner) => write!(f, "Failed to switch chain: {}", inner),
            ConnectorError::Provider(err) => write!(f, "{}", err),
            ConnectorError::InvalidAddress(addr) => write!(f, "Invalid address: {}", addr),
            ConnectorError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConnectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConnectorError::SwitchChain(inner) => Some(inner.as_ref()),
            ConnectorError::Provider(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ProviderError> for ConnectorError {
    fn from(err: ProviderError) -> Self {
        if err.is_user_rejection() {
            ConnectorError::UserRejected(err.message)
        } else {
            ConnectorError::Provider(err)
        }
    }
}

impl From<serde_json::Error> for ConnectorError {
    fn from(err: serde_json::Error) -> Self {
        ConnectorError::Parse(err.to_string())
    }
}
