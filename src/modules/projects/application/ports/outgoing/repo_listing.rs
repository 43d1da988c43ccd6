use async_trait::async_trait;

use crate::modules::projects::domain::RemoteRepo;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepoListingError {
    #[error("Invalid account identifier: {0}")]
    InvalidAccount(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Listing API returned HTTP {0}")]
    Status(u16),

    #[error("Malformed listing payload: {0}")]
    Malformed(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Public repository listing for an account, most recently updated first.
#[async_trait]
pub trait RepoListing: Send + Sync {
    /// Reads the first page only, at most `page_size` records.
    async fn list_repos(
        &self,
        account: &str,
        page_size: u8,
    ) -> Result<Vec<RemoteRepo>, RepoListingError>;
}
