//! Scripted in-memory provider for tests

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{
    ListenerId, ProviderError, ProviderEvent, ProviderEventKind, ProviderListener,
    RequestArguments, RpcMethod, WalletProvider,
};

pub(crate) struct MockProvider {
    connected: AtomicBool,
    login_calls: AtomicUsize,
    login_error: Mutex<Option<ProviderError>>,
    accounts: Mutex<Value>,
    chain_id: Mutex<Value>,
    scripted: Mutex<HashMap<RpcMethod, VecDeque<Result<Value, ProviderError>>>>,
    requests: Mutex<Vec<RequestArguments>>,
    listeners: Mutex<Vec<(ProviderEventKind, ListenerId, ProviderListener)>>,
    next_listener: AtomicU64,
    pub(crate) referral_code: Option<String>,
}

impl MockProvider {
    pub(crate) fn new() -> Self {
        Self {
            connected: AtomicBool::new(true),
            login_calls: AtomicUsize::new(0),
            login_error: Mutex::new(None),
            accounts: Mutex::new(json!(["0xd8da6bf26964af9d7eed9e03e53415d37aa96045"])),
            chain_id: Mutex::new(json!("0x1")),
            scripted: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
            listeners: Mutex::new(Vec::new()),
            next_listener: AtomicU64::new(1),
            referral_code: None,
        }
    }

    pub(crate) fn with_referral_code(mut self, code: Option<&str>) -> Self {
        self.referral_code = code.map(str::to_string);
        self
    }

    pub(crate) fn disconnected(self) -> Self {
        self.connected.store(false, Ordering::SeqCst);
        self
    }

    pub(crate) fn set_login_error(&self, err: ProviderError) {
        *self.login_error.lock().unwrap() = Some(err);
    }

    pub(crate) fn set_accounts(&self, accounts: Value) {
        *self.accounts.lock().unwrap() = accounts;
    }

    pub(crate) fn set_chain_id(&self, chain_id: Value) {
        *self.chain_id.lock().unwrap() = chain_id;
    }

    /// Queue a one-shot response for the next call to `method`
    pub(crate) fn script(&self, method: RpcMethod, response: Result<Value, ProviderError>) {
        self.scripted
            .lock()
            .unwrap()
            .entry(method)
            .or_default()
            .push_back(response);
    }

    pub(crate) fn login_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn requests(&self) -> Vec<RequestArguments> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn count_requests(&self, method: RpcMethod) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method)
            .count()
    }

    pub(crate) fn listener_count(&self, kind: ProviderEventKind) -> usize {
        self.listeners
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _, _)| *k == kind)
            .count()
    }

    /// Deliver an event to every listener registered for its kind
    pub(crate) fn fire(&self, event: ProviderEvent) {
        let kind = event.kind();
        let targets: Vec<ProviderListener> = self
            .listeners
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _, _)| *k == kind)
            .map(|(_, _, l)| l.clone())
            .collect();
        for listener in targets {
            listener(event.clone());
        }
    }
}

#[async_trait]
impl WalletProvider for MockProvider {
    async fn request(&self, args: RequestArguments) -> Result<Value, ProviderError> {
        self.requests.lock().unwrap().push(args.clone());

        if let Some(response) = self
            .scripted
            .lock()
            .unwrap()
            .get_mut(&args.method)
            .and_then(VecDeque::pop_front)
        {
            return response;
        }

        match args.method {
            RpcMethod::EthAccounts => Ok(self.accounts.lock().unwrap().clone()),
            RpcMethod::EthChainId => Ok(self.chain_id.lock().unwrap().clone()),
            RpcMethod::WalletSwitchEthereumChain => {
                let target = args
                    .params
                    .as_ref()
                    .and_then(|p| p.get(0))
                    .cloned()
                    .unwrap_or(Value::Null);
                *self.chain_id.lock().unwrap() = target;
                Ok(Value::Null)
            }
        }
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    async fn login(&self) -> Result<(), ProviderError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.login_error.lock().unwrap().clone() {
            return Err(err);
        }
        self.connected.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn on(&self, kind: ProviderEventKind, listener: ProviderListener) -> ListenerId {
        let id = ListenerId(self.next_listener.fetch_add(1, Ordering::SeqCst));
        self.listeners.lock().unwrap().push((kind, id, listener));
        id
    }

    fn remove_listener(&self, kind: ProviderEventKind, id: ListenerId) {
        self.listeners
            .lock()
            .unwrap()
            .retain(|(k, i, _)| !(*k == kind && *i == id));
    }
}
