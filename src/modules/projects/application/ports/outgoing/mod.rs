mod repo_listing;

pub use repo_listing::{RepoListing, RepoListingError};
