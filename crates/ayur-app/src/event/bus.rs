//! Broadcast bus for application events.
//!
//! Replaces the ad hoc cross-instance change signal: every mutation publishes
//! here, and any number of views subscribe. Publishing never blocks; a view
//! that falls behind sees a lagged receiver and reloads.

use tokio::sync::broadcast;

use crate::event::AppEvent;

const DEFAULT_CAPACITY: usize = 32;

#[derive(Debug, Clone)]
pub struct AppEventBus {
    sender: broadcast::Sender<AppEvent>,
}

impl Default for AppEventBus {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl AppEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    /// Publish to whoever is listening; no subscribers is fine.
    pub fn publish(&self, event: AppEvent) {
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::AppEventBus;
    use crate::event::AppEvent;

    #[tokio::test]
    async fn publish_reaches_every_subscriber() {
        let bus = AppEventBus::new();
        let mut first = bus.subscribe();
        let mut second = bus.subscribe();

        bus.publish(AppEvent::NavigateToCatalog);

        assert_eq!(first.recv().await.unwrap(), AppEvent::NavigateToCatalog);
        assert_eq!(second.recv().await.unwrap(), AppEvent::NavigateToCatalog);
    }

    #[test]
    fn publish_without_subscribers_does_not_panic() {
        AppEventBus::new().publish(AppEvent::NavigateToCatalog);
    }
}
