mod viewport_observer;

pub use viewport_observer::{ObserverError, ViewportObserver};
