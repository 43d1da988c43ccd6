use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::debug;

use crate::modules::projects::application::ports::outgoing::{RepoListing, RepoListingError};
use crate::modules::projects::domain::RemoteRepo;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const MAX_PAGE_SIZE: u8 = 100;

/// Repository listing backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GithubRepoListing {
    client: reqwest::Client,
    api_base: String,
    user_agent: String,
}

impl GithubRepoListing {
    pub fn new(api_base: &str) -> Self {
        Self::with_client(reqwest::Client::new(), api_base)
    }

    pub fn with_client(client: reqwest::Client, api_base: &str) -> Self {
        Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            user_agent: format!("portfolio_actix/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn listing_url(&self, account: &str, page_size: u8) -> Result<String, RepoListingError> {
        let valid = !account.is_empty()
            && account.len() <= 39
            && account.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            && !account.starts_with('-');
        if !valid {
            return Err(RepoListingError::InvalidAccount(account.to_string()));
        }

        let per_page = page_size.clamp(1, MAX_PAGE_SIZE);
        Ok(format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.api_base, account, per_page
        ))
    }
}

impl Default for GithubRepoListing {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

pub fn parse_listing(body: &[u8]) -> Result<Vec<RemoteRepo>, RepoListingError> {
    serde_json::from_slice(body).map_err(|e| RepoListingError::Malformed(e.to_string()))
}

#[async_trait]
impl RepoListing for GithubRepoListing {
    async fn list_repos(
        &self,
        account: &str,
        page_size: u8,
    ) -> Result<Vec<RemoteRepo>, RepoListingError> {
        let url = self.listing_url(account, page_size)?;
        debug!(%url, "Fetching repository listing");

        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, self.user_agent.as_str())
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| RepoListingError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RepoListingError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| RepoListingError::Network(e.to_string()))?;

        parse_listing(&body)
    }
}
