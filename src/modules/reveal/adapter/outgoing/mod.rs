pub mod channel_observer;

pub use channel_observer::ChannelViewportObserver;
