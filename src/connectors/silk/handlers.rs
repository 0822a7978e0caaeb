//! Provider event handlers
//!
//! Translate Silk provider events into connector events.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::address::{normalize_address, parse_chain_id, ChecksumAddress};
use crate::connectors::{ConnectorError, ConnectorEvent, Emitter};
use crate::provider::{ProviderEvent, ProviderListener};

#[derive(Debug, Clone)]
pub(crate) struct EventForwarder {
    emitter: Emitter,
}

impl EventForwarder {
    pub(crate) fn new(emitter: Emitter) -> Self {
        Self { emitter }
    }

    pub(crate) fn handle(&self, event: ProviderEvent) {
        match event {
            ProviderEvent::AccountsChanged(accounts) => self.on_accounts_changed(&accounts),
            ProviderEvent::ChainChanged(chain) => self.on_chain_changed(&chain),
            ProviderEvent::Disconnect => self.on_disconnect(),
        }
    }

    /// Listener to register with the provider
    pub(crate) fn listener(&self) -> ProviderListener {
        let forwarder = self.clone();
        Arc::new(move |event| forwarder.handle(event))
    }

    pub(crate) fn on_accounts_changed(&self, accounts: &[String]) {
        if accounts.is_empty() {
            self.emitter.emit(ConnectorEvent::Disconnect);
            return;
        }

        let normalized: Result<Vec<ChecksumAddress>, ConnectorError> =
            accounts.iter().map(|a| normalize_address(a)).collect();
        match normalized {
            Ok(accounts) => self.emitter.emit(ConnectorEvent::accounts_changed(accounts)),
            Err(err) => warn!("Ignoring accountsChanged with malformed payload: {}", err),
        }
    }

    pub(crate) fn on_chain_changed(&self, chain: &Value) {
        match parse_chain_id(chain) {
            Ok(chain_id) => {
                debug!("Provider switched to chain {}", chain_id);
                self.emitter.emit(ConnectorEvent::chain_changed(chain_id));
            }
            Err(err) => warn!("Ignoring chainChanged: {}", err),
        }
    }

    pub(crate) fn on_disconnect(&self) {
        self.emitter.emit(ConnectorEvent::Disconnect);
    }
}
