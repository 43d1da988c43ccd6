use serde::Serialize;

use crate::modules::config::domain::StaticProject;
use crate::modules::projects::domain::entities::{FeedState, RemoteRepo};
use crate::modules::reveal::domain::RevealConfig;

/// Tech chips shown on a compact static card before collapsing into "+N more".
pub const STATIC_CHIP_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Repository,
    Live,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardLink {
    pub kind: LinkKind,
    pub url: String,
}

impl CardLink {
    fn present(kind: LinkKind, url: Option<&str>) -> Option<Self> {
        url.map(str::trim)
            .filter(|u| !u.is_empty())
            .map(|u| CardLink {
                kind,
                url: u.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoteCard {
    pub id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub chips: Vec<String>,
    pub stars: u32,
    pub links: Vec<CardLink>,
    pub reveal_delay_ms: u64,
}

impl From<&RemoteRepo> for RemoteCard {
    fn from(repo: &RemoteRepo) -> Self {
        let chips = if repo.topics.is_empty() {
            repo.language.iter().cloned().collect()
        } else {
            repo.topics.clone()
        };

        let links = [
            CardLink::present(LinkKind::Live, repo.homepage.as_deref()),
            CardLink::present(LinkKind::Repository, Some(repo.html_url.as_str())),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self {
            id: repo.id,
            title: repo.name.clone(),
            description: repo.description.clone().filter(|d| !d.trim().is_empty()),
            chips,
            stars: repo.stargazers_count,
            links,
            reveal_delay_ms: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticCard {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub chips: Vec<String>,
    /// Tech entries left out of `chips`.
    pub more: usize,
    pub featured: bool,
    pub links: Vec<CardLink>,
    pub reveal_delay_ms: u64,
}

impl From<&StaticProject> for StaticCard {
    fn from(project: &StaticProject) -> Self {
        let chips: Vec<String> = project.tech.iter().take(STATIC_CHIP_LIMIT).cloned().collect();
        let more = project.tech.len().saturating_sub(chips.len());

        let links = [
            CardLink::present(LinkKind::Repository, project.github.as_deref()),
            CardLink::present(LinkKind::Live, project.live.as_deref()),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            image: project.image.clone(),
            chips,
            more,
            featured: project.featured,
            links,
            reveal_delay_ms: 0,
        }
    }
}

/// Cards that enter one after another once their grid is revealed.
pub trait Staggered {
    fn set_reveal_delay(&mut self, delay_ms: u64);
}

impl Staggered for RemoteCard {
    fn set_reveal_delay(&mut self, delay_ms: u64) {
        self.reveal_delay_ms = delay_ms;
    }
}

impl Staggered for StaticCard {
    fn set_reveal_delay(&mut self, delay_ms: u64) {
        self.reveal_delay_ms = delay_ms;
    }
}

/// Assigns each card its offset from the grid's reveal schedule.
pub fn staggered<C: Staggered>(mut cards: Vec<C>, reveal: &RevealConfig) -> Vec<C> {
    let count = cards.len();
    for (card, child) in cards.iter_mut().zip(reveal.schedule(count)) {
        card.set_reveal_delay(child.delay_ms);
    }
    cards
}

/// Static projects for the secondary grid: every entry not marked featured.
pub fn other_projects(projects: &[StaticProject]) -> Vec<StaticCard> {
    projects
        .iter()
        .filter(|p| !p.featured)
        .map(StaticCard::from)
        .collect()
}

//
// ──────────────────────────────────────────────────────────
// Section view
// ──────────────────────────────────────────────────────────
//

pub const EMPTY_FEATURED_NOTICE: &str =
    "No featured projects yet. Tag a repository with the marker topic to list it here.";
pub const FAILED_FEATURED_NOTICE: &str =
    "Featured projects could not be loaded right now. The rest of the page is unaffected.";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FeaturedView {
    /// No account to fetch from; the curated featured entries are shown.
    Curated { cards: Vec<StaticCard> },
    Loading,
    Ready { cards: Vec<RemoteCard> },
    Empty { notice: String },
    Failed { notice: String, detail: String },
}

impl FeaturedView {
    pub fn from_state(state: &FeedState, projects: &[StaticProject], reveal: &RevealConfig) -> Self {
        match state {
            FeedState::Idle => FeaturedView::Curated {
                cards: staggered(
                    projects
                        .iter()
                        .filter(|p| p.featured)
                        .map(StaticCard::from)
                        .collect(),
                    reveal,
                ),
            },
            FeedState::Loading => FeaturedView::Loading,
            FeedState::Success(repos) if repos.is_empty() => FeaturedView::Empty {
                notice: EMPTY_FEATURED_NOTICE.to_string(),
            },
            FeedState::Success(repos) => FeaturedView::Ready {
                cards: staggered(repos.iter().map(RemoteCard::from).collect(), reveal),
            },
            FeedState::Failure(detail) => FeaturedView::Failed {
                notice: FAILED_FEATURED_NOTICE.to_string(),
                detail: detail.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsView {
    pub featured: FeaturedView,
    pub other: Vec<StaticCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_projects_url: Option<String>,
    pub reveal: RevealConfig,
}

impl ProjectsView {
    pub fn build(
        state: &FeedState,
        projects: &[StaticProject],
        all_projects_url: Option<String>,
        reveal: &RevealConfig,
    ) -> Self {
        Self {
            featured: FeaturedView::from_state(state, projects, reveal),
            other: staggered(other_projects(projects), reveal),
            all_projects_url,
            reveal: reveal.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::reveal::domain::VisualState;
    use crate::tests::support::fixtures::{remote_repo, static_project};

    #[test]
    fn remote_chips_use_topics() {
        let card = RemoteCard::from(&remote_repo(1, "alpha", &["featured", "rust"]));
        assert_eq!(card.chips, vec!["featured", "rust"]);
    }

    #[test]
    fn remote_chips_fall_back_to_language() {
        let mut repo = remote_repo(1, "alpha", &[]);
        repo.language = Some("Rust".to_string());

        assert_eq!(RemoteCard::from(&repo).chips, vec!["Rust"]);
    }

    #[test]
    fn remote_chips_empty_without_topics_or_language() {
        let mut repo = remote_repo(1, "alpha", &[]);
        repo.language = None;

        assert!(RemoteCard::from(&repo).chips.is_empty());
    }

    #[test]
    fn remote_links_only_when_present() {
        let mut repo = remote_repo(1, "alpha", &["featured"]);
        repo.homepage = Some("  ".to_string());
        let card = RemoteCard::from(&repo);

        assert_eq!(card.links.len(), 1);
        assert_eq!(card.links[0].kind, LinkKind::Repository);

        repo.homepage = Some("https://alpha.example".to_string());
        let card = RemoteCard::from(&repo);
        assert_eq!(
            card.links.iter().map(|l| l.kind).collect::<Vec<_>>(),
            vec![LinkKind::Live, LinkKind::Repository]
        );
    }

    #[test]
    fn static_card_truncates_chips() {
        let mut project = static_project("Budget", false);
        project.tech = vec!["A", "B", "C", "D", "E"].into_iter().map(String::from).collect();

        let card = StaticCard::from(&project);
        assert_eq!(card.chips, vec!["A", "B", "C"]);
        assert_eq!(card.more, 2);
    }

    #[test]
    fn static_card_omits_absent_links() {
        let mut project = static_project("Sokoban", false);
        project.live = None;

        let card = StaticCard::from(&project);
        assert_eq!(
            card.links,
            vec![CardLink {
                kind: LinkKind::Repository,
                url: "https://github.com/someone/sokoban".to_string()
            }]
        );
    }

    #[test]
    fn other_projects_excludes_featured() {
        let projects = vec![
            static_project("Featured", true),
            static_project("Sokoban", false),
            static_project("Hangman", false),
        ];

        let titles: Vec<_> = other_projects(&projects).into_iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["Sokoban", "Hangman"]);
    }

    #[test]
    fn empty_success_is_explicit_empty_state() {
        let view = FeaturedView::from_state(&FeedState::Success(vec![]), &[], &RevealConfig::default());
        assert!(matches!(view, FeaturedView::Empty { .. }));
    }

    #[test]
    fn idle_shows_curated_featured_entries() {
        let projects = vec![static_project("Curated", true), static_project("Other", false)];

        match FeaturedView::from_state(&FeedState::Idle, &projects, &RevealConfig::default()) {
            FeaturedView::Curated { cards } => {
                assert_eq!(cards.len(), 1);
                assert_eq!(cards[0].title, "Curated");
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn failure_keeps_static_grid_intact() {
        let projects = vec![static_project("Curated", true), static_project("Other", false)];

        let reveal = RevealConfig::default();
        let healthy = ProjectsView::build(&FeedState::Success(vec![]), &projects, None, &reveal);
        let failed =
            ProjectsView::build(&FeedState::Failure("HTTP 500".into()), &projects, None, &reveal);

        assert_eq!(healthy.other, failed.other);
        assert!(matches!(failed.featured, FeaturedView::Failed { ref detail, .. } if detail == "HTTP 500"));
    }

    #[test]
    fn view_serializes_with_status_tag() {
        let view = ProjectsView::build(
            &FeedState::Loading,
            &[],
            Some("https://github.com/someone".to_string()),
            &RevealConfig::default(),
        );
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["featured"]["status"], "loading");
        assert_eq!(json["allProjectsUrl"], "https://github.com/someone");
        assert!(json["other"].as_array().unwrap().is_empty());
    }

    #[test]
    fn cards_carry_staggered_reveal_delays() {
        let reveal = RevealConfig::new(0.2, 150, 600, VisualState::rising(30.0));
        let projects = vec![
            static_project("Curated", true),
            static_project("Sokoban", false),
            static_project("Hangman", false),
        ];
        let repos = vec![
            remote_repo(1, "alpha", &["featured"]),
            remote_repo(2, "beta", &["featured"]),
        ];

        let view = ProjectsView::build(&FeedState::Success(repos), &projects, None, &reveal);

        let other: Vec<_> = view.other.iter().map(|c| c.reveal_delay_ms).collect();
        assert_eq!(other, vec![0, 150]);
        match view.featured {
            FeaturedView::Ready { cards } => {
                let delays: Vec<_> = cards.iter().map(|c| c.reveal_delay_ms).collect();
                assert_eq!(delays, vec![0, 150]);
            }
            other => panic!("unexpected view: {:?}", other),
        }
        assert_eq!(view.reveal, reveal);
    }
}
