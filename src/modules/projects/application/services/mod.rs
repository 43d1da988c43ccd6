pub mod project_feed;
