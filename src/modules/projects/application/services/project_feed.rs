use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::modules::projects::application::ports::outgoing::RepoListing;
use crate::modules::projects::domain::{FeedState, RemoteRepo};

/// Keeps repositories whose topics contain `marker`, in the order received.
pub fn featured_only(repos: Vec<RemoteRepo>, marker: &str) -> Vec<RemoteRepo> {
    repos.into_iter().filter(|r| r.has_topic(marker)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedOptions {
    /// Account on the repository host; `None` keeps the feed idle.
    pub account: Option<String>,
    pub marker: String,
    pub page_size: u8,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            account: None,
            marker: "featured".to_string(),
            page_size: 100,
        }
    }
}

struct FeedShared {
    state: Mutex<FeedState>,
    mounted: AtomicBool,
    settled: Notify,
}

impl FeedShared {
    fn state(&self) -> MutexGuard<'_, FeedState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Remote "featured projects" feed, fetched once per mount.
///
/// Mounting with an account moves straight to `Loading` and issues a
/// single request; there is no retry and no timeout. After
/// [`ProjectFeed::unmount`] (or drop) a late result is discarded.
pub struct ProjectFeed {
    shared: Arc<FeedShared>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl ProjectFeed {
    /// Mounts the feed. Must run inside a tokio runtime when an account is set.
    pub fn mount(listing: Arc<dyn RepoListing + Send + Sync>, options: FeedOptions) -> Self {
        let Some(account) = options.account.filter(|a| !a.trim().is_empty()) else {
            info!("No repository account configured, featured feed stays idle");
            return Self::with_state(FeedState::Idle, None);
        };

        let shared = Arc::new(FeedShared {
            state: Mutex::new(FeedState::Loading),
            mounted: AtomicBool::new(true),
            settled: Notify::new(),
        });

        let task_shared = Arc::clone(&shared);
        let marker = options.marker;
        let page_size = options.page_size;

        let task = tokio::spawn(async move {
            info!(%account, "Fetching featured repositories");
            let result = listing.list_repos(&account, page_size).await;

            let mut state = task_shared.state();
            if !task_shared.mounted.load(Ordering::Acquire) {
                debug!(%account, "Feed unmounted before fetch settled, discarding result");
                return;
            }

            *state = match result {
                Ok(repos) => {
                    let total = repos.len();
                    let featured = featured_only(repos, &marker);
                    info!(total, featured = featured.len(), "Repository listing loaded");
                    FeedState::Success(featured)
                }
                Err(err) => {
                    warn!(%account, error = %err, "Repository listing failed");
                    FeedState::Failure(err.to_string())
                }
            };
            drop(state);
            task_shared.settled.notify_waiters();
        });

        Self::with_state_shared(shared, Some(task))
    }

    fn with_state(state: FeedState, task: Option<JoinHandle<()>>) -> Self {
        let shared = Arc::new(FeedShared {
            state: Mutex::new(state),
            mounted: AtomicBool::new(true),
            settled: Notify::new(),
        });
        Self::with_state_shared(shared, task)
    }

    fn with_state_shared(shared: Arc<FeedShared>, task: Option<JoinHandle<()>>) -> Self {
        Self {
            shared,
            task: Mutex::new(task),
        }
    }

    pub fn state(&self) -> FeedState {
        self.shared.state().clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.shared.mounted.load(Ordering::Acquire)
    }

    /// Resolves once the feed leaves `Loading`, or right away when unmounted.
    pub async fn wait_settled(&self) -> FeedState {
        loop {
            let notified = self.shared.settled.notified();
            {
                let state = self.shared.state();
                if !state.is_loading() || !self.is_mounted() {
                    return state.clone();
                }
            }
            notified.await;
        }
    }

    /// Stops the in-flight fetch; any later result is dropped.
    pub fn unmount(&self) {
        {
            let _state = self.shared.state();
            self.shared.mounted.store(false, Ordering::Release);
        }

        let task = self
            .task
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        if let Some(task) = task {
            task.abort();
        }
        self.shared.settled.notify_waiters();
    }
}

impl Drop for ProjectFeed {
    fn drop(&mut self) {
        self.unmount();
    }
}
