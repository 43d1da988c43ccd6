pub mod ports;
pub mod services;

pub use services::project_feed::{featured_only, FeedOptions, ProjectFeed};
