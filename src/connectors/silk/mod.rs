//! Silk Connector
//!
//! Adapts the Silk wallet provider to [`WalletConnector`]. The provider is
//! built lazily through a [`ProviderFactory`] and shared for the connector's
//! lifetime; its events are re-emitted as [`ConnectorEvent`]s.

mod handlers;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::{broadcast, Mutex, OnceCell};
use tracing::{debug, error, info, warn};

use crate::address::{chain_id_to_hex, normalize_accounts, parse_chain_id, ChecksumAddress};
use crate::config::ConnectorConfig;
use crate::connectors::{
    Chain, ConnectParams, ConnectionResult, ConnectorError, ConnectorEvent, Emitter,
    WalletConnector,
};
use crate::provider::{
    ListenerId, ProviderEventKind, ProviderFactory, RequestArguments, RpcMethod, WalletProvider,
};

use handlers::EventForwarder;

pub const SILK_CONNECTOR_ID: &str = "silk";
pub const SILK_CONNECTOR_NAME: &str = "Silk Security Connector";
pub const SILK_CONNECTOR_TYPE: &str = "Silk";

const SUBSCRIBED_EVENTS: [ProviderEventKind; 3] = [
    ProviderEventKind::AccountsChanged,
    ProviderEventKind::ChainChanged,
    ProviderEventKind::Disconnect,
];

/// Connector for the Silk wallet
pub struct SilkConnector<F: ProviderFactory> {
    config: ConnectorConfig,
    factory: F,
    provider: OnceCell<Arc<F::Provider>>,
    emitter: Emitter,
    forwarder: EventForwarder,
    subscriptions: Mutex<Vec<(ProviderEventKind, ListenerId)>>,
}

impl<F: ProviderFactory> SilkConnector<F> {
    /// Create a connector with its own event channel
    pub fn new(config: ConnectorConfig, factory: F) -> Self {
        Self::with_emitter(config, factory, Emitter::default())
    }

    /// Create a connector that emits into the framework's channel
    pub fn with_emitter(config: ConnectorConfig, factory: F, emitter: Emitter) -> Self {
        Self {
            config,
            factory,
            provider: OnceCell::new(),
            forwarder: EventForwarder::new(emitter.clone()),
            emitter,
            subscriptions: Mutex::new(Vec::new()),
        }
    }

    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    /// Register the event handlers, replacing any left over from a previous connect
    async fn subscribe_provider(&self, provider: &F::Provider) {
        let mut subscriptions = self.subscriptions.lock().await;
        Self::remove_listeners(provider, &mut subscriptions);
        for kind in SUBSCRIBED_EVENTS {
            let id = provider.on(kind, self.forwarder.listener());
            subscriptions.push((kind, id));
        }
    }

    /// Remove the event handlers registered by the last connect
    async fn unsubscribe_provider(&self, provider: &F::Provider) {
        let mut subscriptions = self.subscriptions.lock().await;
        Self::remove_listeners(provider, &mut subscriptions);
    }

    fn remove_listeners(
        provider: &F::Provider,
        subscriptions: &mut Vec<(ProviderEventKind, ListenerId)>,
    ) {
        for (kind, id) in subscriptions.drain(..) {
            provider.remove_listener(kind, id);
        }
    }

    async fn try_connect(&self, params: ConnectParams) -> Result<ConnectionResult, ConnectorError> {
        self.emitter.emit(ConnectorEvent::connecting());

        let provider = self.get_provider().await?;
        self.subscribe_provider(&provider).await;

        if !provider.is_connected() {
            if let Err(err) = provider.login().await {
                warn!("Unable to login: {}", err);
                return Err(ConnectorError::UserRejected("User rejected login".to_string()));
            }
        }

        let mut chain_id = self.get_chain_id().await?;
        // chain id 0 means "no preference"
        if let Some(requested) = params.chain_id.filter(|id| *id != 0) {
            if requested != chain_id {
                match self.switch_chain(requested).await {
                    Ok(chain) => chain_id = chain.id,
                    Err(err) if err.is_user_rejection() => return Err(err),
                    Err(err) => {
                        warn!("Staying on chain {} after failed switch: {}", chain_id, err)
                    }
                }
            }
        }

        let accounts = self.get_accounts().await?;

        Ok(ConnectionResult { accounts, chain_id })
    }

    async fn try_switch_chain(&self, chain_id: u64) -> Result<Chain, ConnectorError> {
        let chain = self
            .config
            .chain(chain_id)
            .cloned()
            .ok_or(ConnectorError::ChainNotConfigured(chain_id))?;

        let provider = self.get_provider().await?;
        provider
            .request(RequestArguments::with_params(
                RpcMethod::WalletSwitchEthereumChain,
                vec![Value::String(chain_id_to_hex(chain.id))],
            ))
            .await?;

        info!("Chain switched to {}", chain.name);
        self.emitter.emit(ConnectorEvent::chain_changed(chain_id));

        Ok(chain)
    }
}

#[async_trait]
impl<F: ProviderFactory> WalletConnector for SilkConnector<F> {
    type Provider = F::Provider;

    fn id(&self) -> &str {
        SILK_CONNECTOR_ID
    }

    fn name(&self) -> &str {
        SILK_CONNECTOR_NAME
    }

    fn kind(&self) -> &str {
        SILK_CONNECTOR_TYPE
    }

    fn chains(&self) -> &[Chain] {
        &self.config.chains
    }

    fn supports_simulation(&self) -> bool {
        false
    }

    fn subscribe(&self) -> broadcast::Receiver<ConnectorEvent> {
        self.emitter.subscribe()
    }

    async fn connect(&self, params: ConnectParams) -> Result<ConnectionResult, ConnectorError> {
        match self.try_connect(params).await {
            Ok(result) => Ok(result),
            Err(err) => {
                error!("Error while connecting: {}", err);
                if let Some(provider) = self.provider.get() {
                    self.unsubscribe_provider(provider).await;
                }
                self.forwarder.on_disconnect();
                Err(err)
            }
        }
    }

    async fn disconnect(&self) -> Result<(), ConnectorError> {
        let provider = self.get_provider().await?;
        self.unsubscribe_provider(&provider).await;
        Ok(())
    }

    async fn is_authorized(&self) -> bool {
        match self.get_accounts().await {
            Ok(accounts) => !accounts.is_empty(),
            Err(err) => {
                debug!("Authorization check failed: {}", err);
                false
            }
        }
    }

    async fn get_provider(&self) -> Result<Arc<F::Provider>, ConnectorError> {
        let provider = self
            .provider
            .get_or_try_init(|| async {
                debug!("Initializing Silk provider");
                let provider = self
                    .factory
                    .create(self.config.referral_code.as_deref())
                    .await?;
                Ok::<_, ConnectorError>(Arc::new(provider))
            })
            .await?;
        Ok(provider.clone())
    }

    async fn get_accounts(&self) -> Result<Vec<ChecksumAddress>, ConnectorError> {
        let provider = self.get_provider().await?;
        let accounts = provider
            .request(RequestArguments::new(RpcMethod::EthAccounts))
            .await?;
        normalize_accounts(&accounts)
    }

    async fn get_chain_id(&self) -> Result<u64, ConnectorError> {
        let provider = self.get_provider().await?;
        let chain_id = provider
            .request(RequestArguments::new(RpcMethod::EthChainId))
            .await?;
        parse_chain_id(&chain_id)
    }

    async fn switch_chain(&self, chain_id: u64) -> Result<Chain, ConnectorError> {
        self.try_switch_chain(chain_id).await.map_err(|err| {
            error!("Unable to switch chain: {}", err);
            ConnectorError::switch_chain(err)
        })
    }
}
