use serde::{Deserialize, Serialize};

/// One repository record as served by the listing API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteRepo {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub language: Option<String>,
}

impl RemoteRepo {
    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics.iter().any(|t| t.eq_ignore_ascii_case(topic))
    }
}

/// Remote half of the project feed. Exactly one variant holds at a time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum FeedState {
    /// No account configured; nothing is fetched.
    Idle,
    Loading,
    /// Already narrowed to repositories carrying the marker tag.
    Success(Vec<RemoteRepo>),
    Failure(String),
}

impl FeedState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FeedState::Loading)
    }

    pub fn tag(&self) -> &'static str {
        match self {
            FeedState::Idle => "idle",
            FeedState::Loading => "loading",
            FeedState::Success(_) => "success",
            FeedState::Failure(_) => "failure",
        }
    }
}
