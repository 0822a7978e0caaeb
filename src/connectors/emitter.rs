//! Event channel towards the connector framework
//!
//! The framework owns its event bus; the connector only needs somewhere to
//! push [`ConnectorEvent`]s. Emission never blocks and never fails: with no
//! subscribers the event is dropped.

use tokio::sync::broadcast;
use tracing::debug;

use crate::connectors::ConnectorEvent;

/// Default number of buffered events per subscriber
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Broadcast handle for connector events
#[derive(Debug, Clone)]
pub struct Emitter {
    sender: broadcast::Sender<ConnectorEvent>,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

impl Emitter {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Receive every event emitted from now on
    pub fn subscribe(&self) -> broadcast::Receiver<ConnectorEvent> {
        self.sender.subscribe()
    }

    pub fn emit(&self, event: ConnectorEvent) {
        debug!("Emitting connector event: {:?}", event);
        if self.sender.send(event).is_err() {
            debug!("No event subscribers, event dropped");
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
