pub mod github_repo_listing;

pub use github_repo_listing::GithubRepoListing;
