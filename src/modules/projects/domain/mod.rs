pub mod cards;
pub mod entities;

pub use cards::{
    other_projects, CardLink, FeaturedView, LinkKind, ProjectsView, RemoteCard, StaticCard,
};
pub use entities::{FeedState, RemoteRepo};
