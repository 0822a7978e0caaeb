//! EVM address and chain id normalization
//!
//! Everything the provider hands back is loosely typed JSON. Addresses are
//! parsed into [`ChecksumAddress`] and chain ids into `u64` at the boundary.

use std::fmt;
use std::str::FromStr;

use ethers_core::types::Address;
use ethers_core::utils::to_checksum;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::connectors::ConnectorError;

/// An EVM address rendered in EIP-55 checksummed form
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChecksumAddress(Address);

impl ChecksumAddress {
    /// Get the raw address
    pub fn address(&self) -> Address {
        self.0
    }
}

impl From<Address> for ChecksumAddress {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl FromStr for ChecksumAddress {
    type Err = ConnectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hex = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConnectorError::InvalidAddress(s.to_string()));
        }

        Address::from_str(hex)
            .map(Self)
            .map_err(|_| ConnectorError::InvalidAddress(s.to_string()))
    }
}

impl fmt::Display for ChecksumAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_checksum(&self.0, None))
    }
}

impl fmt::Debug for ChecksumAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChecksumAddress({})", self)
    }
}

impl Serialize for ChecksumAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ChecksumAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Normalize a single address string coming from the provider
pub fn normalize_address(raw: &str) -> Result<ChecksumAddress, ConnectorError> {
    raw.parse()
}

/// Normalize the provider's account list.
///
/// Anything other than a JSON array (`null` included) means "no accounts".
pub fn normalize_accounts(value: &Value) -> Result<Vec<ChecksumAddress>, ConnectorError> {
    let Some(entries) = value.as_array() else {
        return Ok(Vec::new());
    };

    entries
        .iter()
        .map(|entry| match entry.as_str() {
            Some(s) => normalize_address(s),
            None => Err(ConnectorError::InvalidAddress(entry.to_string())),
        })
        .collect()
}

/// Parse a chain id from a number, a `0x` hex string or a decimal string
pub fn parse_chain_id(value: &Value) -> Result<u64, ConnectorError> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64))
            .ok_or_else(|| ConnectorError::Parse(format!("invalid chain id: {}", n))),
        Value::String(s) => parse_chain_id_str(s),
        other => Err(ConnectorError::Parse(format!("invalid chain id: {}", other))),
    }
}

fn parse_chain_id_str(s: &str) -> Result<u64, ConnectorError> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse::<u64>(),
    };
    parsed.map_err(|e| ConnectorError::Parse(format!("invalid chain id {:?}: {}", s, e)))
}

/// Format a chain id the way `wallet_switchEthereumChain` expects it: "0x89"
pub fn chain_id_to_hex(chain_id: u64) -> String {
    format!("0x{:x}", chain_id)
}
