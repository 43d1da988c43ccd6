use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ObserverError {
    #[error("Viewport observation is unavailable")]
    Unavailable,

    #[error("Region not observable: {0}")]
    UnknownRegion(String),
}

/// Source of intersection ratios for a page region.
///
/// Each received value is the visible fraction of the region's area. The
/// subscription ends when the receiver is dropped.
pub trait ViewportObserver: Send + Sync {
    fn observe(
        &self,
        region: &str,
        threshold: f32,
    ) -> Result<mpsc::UnboundedReceiver<f32>, ObserverError>;
}
