use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::modules::contact::application::ports::outgoing::{ContactSubmitter, SubmissionError};
use crate::modules::contact::domain::ContactMessage;
use crate::modules::projects::application::ports::outgoing::{RepoListing, RepoListingError};
use crate::modules::projects::domain::RemoteRepo;

#[derive(Clone, Default)]
pub struct StubContactSubmitter {
    received: Arc<Mutex<Vec<ContactMessage>>>,
    failure: Option<String>,
}

impl StubContactSubmitter {
    pub fn success() -> Self {
        Self::default()
    }

    pub fn error(msg: &str) -> Self {
        Self {
            received: Arc::default(),
            failure: Some(msg.to_string()),
        }
    }

    pub fn received(&self) -> Vec<ContactMessage> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactSubmitter for StubContactSubmitter {
    async fn submit(&self, message: ContactMessage) -> Result<(), SubmissionError> {
        self.received.lock().unwrap().push(message);
        match &self.failure {
            Some(msg) => Err(SubmissionError::Transport(msg.clone())),
            None => Ok(()),
        }
    }
}

#[derive(Clone)]
pub struct StubRepoListing {
    result: Result<Vec<RemoteRepo>, RepoListingError>,
}

impl StubRepoListing {
    pub fn success(repos: Vec<RemoteRepo>) -> Self {
        Self { result: Ok(repos) }
    }

    pub fn error(err: RepoListingError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl RepoListing for StubRepoListing {
    async fn list_repos(
        &self,
        _account: &str,
        _page_size: u8,
    ) -> Result<Vec<RemoteRepo>, RepoListingError> {
        self.result.clone()
    }
}
