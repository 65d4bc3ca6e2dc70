//! In-process event bus for service mutations.
//!
//! Uses a tokio broadcast channel; publishing with no subscribers is not an
//! error.

use dynoserv_core::service::ServiceEvent;
use tokio::sync::broadcast;

/// Channel capacity for service events.
const CHANNEL_CAPACITY: usize = 100;

/// Broadcasts [`ServiceEvent`]s to every subscriber.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ServiceEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Publishes an event. Returns the number of subscribers that received it.
    pub fn publish(&self, event: ServiceEvent) -> usize {
        tracing::trace!(path = %event.path, event = event.kind.name(), "Publishing service event");
        self.sender.send(event).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ServiceEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
