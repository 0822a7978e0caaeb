//! Connector configuration
//!
//! What the framework hands the connector at creation time: the configured
//! chains and an optional Silk referral code.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::connectors::{Chain, ConnectorError};

/// Configuration for a Silk connector
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorConfig {
    /// Chains the dApp is configured for
    #[serde(default)]
    pub chains: Vec<Chain>,
    /// Referral code for the Silk points system, passed to the provider as-is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
}

impl ConnectorConfig {
    pub fn new(chains: Vec<Chain>) -> Self {
        Self {
            chains,
            referral_code: None,
        }
    }

    pub fn with_chain(mut self, chain: Chain) -> Self {
        self.chains.push(chain);
        self
    }

    pub fn with_referral_code(mut self, code: &str) -> Self {
        self.referral_code = Some(code.to_string());
        self
    }

    /// Look up a configured chain by id
    pub fn chain(&self, id: u64) -> Option<&Chain> {
        self.chains.iter().find(|c| c.id == id)
    }

    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, ConnectorError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConnectorError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConnectorError::Parse(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&contents)
    }
}
