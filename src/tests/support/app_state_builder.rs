use crate::modules::config::application::ConfigStore;
use crate::modules::contact::application::ports::outgoing::ContactSubmitter;
use crate::modules::projects::application::{FeedOptions, ProjectFeed};
use crate::tests::support::fixtures::sample_document;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    config: Option<Arc<ConfigStore>>,
    project_feed: Option<Arc<ProjectFeed>>,
    contact_submitter: Option<Arc<dyn ContactSubmitter + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            config: None,
            project_feed: None,
            contact_submitter: Some(Arc::new(StubContactSubmitter::success())),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_config(mut self, store: ConfigStore) -> Self {
        self.config = Some(Arc::new(store));
        self
    }

    pub fn with_project_feed(mut self, feed: ProjectFeed) -> Self {
        self.project_feed = Some(Arc::new(feed));
        self
    }

    pub fn with_contact_submitter(
        mut self,
        submitter: impl ContactSubmitter + Send + Sync + 'static,
    ) -> Self {
        self.contact_submitter = Some(Arc::new(submitter));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let config = self.config.unwrap_or_else(|| {
            Arc::new(ConfigStore::from_document(sample_document()).expect("sample document is valid"))
        });

        // Without an account the feed stays idle and never spawns a fetch.
        let project_feed = self.project_feed.unwrap_or_else(|| {
            Arc::new(ProjectFeed::mount(
                Arc::new(StubRepoListing::success(vec![])),
                FeedOptions::default(),
            ))
        });

        web::Data::new(AppState {
            config,
            project_feed,
            contact_submitter: self.contact_submitter.expect("contact_submitter not set"),
        })
    }
}
