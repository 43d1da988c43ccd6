use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use tokio::sync::mpsc;
use tracing::debug;

use crate::modules::reveal::application::ports::outgoing::{ObserverError, ViewportObserver};

/// In-process observer fed by whoever knows the viewport geometry
/// (a client relaying intersection events, or a test).
#[derive(Default)]
pub struct ChannelViewportObserver {
    regions: Mutex<HashMap<String, mpsc::UnboundedSender<f32>>>,
}

impl ChannelViewportObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a ratio to the region's subscriber. Returns `false` when nobody listens.
    pub fn signal(&self, region: &str, ratio: f32) -> bool {
        let mut regions = self.regions();
        match regions.get(region) {
            Some(sender) if sender.send(ratio).is_ok() => true,
            Some(_) => {
                regions.remove(region);
                false
            }
            None => false,
        }
    }

    /// Ends the region's signal stream.
    pub fn close(&self, region: &str) {
        self.regions().remove(region);
    }

    pub fn is_observed(&self, region: &str) -> bool {
        self.regions()
            .get(region)
            .is_some_and(|sender| !sender.is_closed())
    }

    fn regions(&self) -> MutexGuard<'_, HashMap<String, mpsc::UnboundedSender<f32>>> {
        self.regions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ViewportObserver for ChannelViewportObserver {
    fn observe(
        &self,
        region: &str,
        threshold: f32,
    ) -> Result<mpsc::UnboundedReceiver<f32>, ObserverError> {
        if region.trim().is_empty() {
            return Err(ObserverError::UnknownRegion(region.to_string()));
        }

        let (sender, receiver) = mpsc::unbounded_channel();
        debug!(region, threshold, "Observing region");
        self.regions().insert(region.to_string(), sender);
        Ok(receiver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delivers_signals_to_subscriber() {
        let observer = ChannelViewportObserver::new();
        let mut receiver = observer.observe("about", 0.3).unwrap();

        assert!(observer.signal("about", 0.25));
        assert_eq!(receiver.recv().await, Some(0.25));
    }

    #[test]
    fn signal_without_subscriber_is_dropped() {
        let observer = ChannelViewportObserver::new();
        assert!(!observer.signal("nowhere", 1.0));
    }

    #[test]
    fn dropped_receiver_stops_observation() {
        let observer = ChannelViewportObserver::new();
        let receiver = observer.observe("hero", 0.0).unwrap();
        assert!(observer.is_observed("hero"));

        drop(receiver);

        assert!(!observer.is_observed("hero"));
        assert!(!observer.signal("hero", 1.0));
    }

    #[test]
    fn blank_region_is_rejected() {
        let observer = ChannelViewportObserver::new();
        assert_eq!(
            observer.observe("  ", 0.2).unwrap_err(),
            ObserverError::UnknownRegion("  ".to_string())
        );
    }
}
