use serde::Serialize;

use crate::modules::config::application::ConfigStore;
use crate::modules::config::domain::{EducationEntry, ExperienceEntry};
use crate::modules::reveal::domain::RevealConfig;

const ACHIEVEMENT_STEP_MS: u64 = 100;
const ACHIEVEMENT_OFFSET_MS: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineSide {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub text: String,
    pub reveal_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceCard {
    pub role: String,
    pub organization: String,
    pub duration: String,
    pub description: String,
    pub side: TimelineSide,
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceView {
    pub timeline: Vec<ExperienceCard>,
    pub education: Vec<EducationEntry>,
    pub reveal: RevealConfig,
}

impl ExperienceView {
    pub fn build(store: &ConfigStore) -> Self {
        let reveal = store.animations().experience.clone();
        let timeline = store
            .document()
            .experience
            .iter()
            .enumerate()
            .map(|(index, entry)| card(index, entry, &reveal))
            .collect();

        Self {
            timeline,
            education: store.document().education.clone(),
            reveal,
        }
    }
}

/// Achievement `a` of entry `i` appears at `i * stagger + a * 100ms + 500ms`.
fn card(index: usize, entry: &ExperienceEntry, reveal: &RevealConfig) -> ExperienceCard {
    let entry_delay = reveal.stagger_ms * index as u64;
    let achievements = entry
        .achievements
        .iter()
        .enumerate()
        .map(|(a, text)| Achievement {
            text: text.clone(),
            reveal_delay_ms: entry_delay + a as u64 * ACHIEVEMENT_STEP_MS + ACHIEVEMENT_OFFSET_MS,
        })
        .collect();

    ExperienceCard {
        role: entry.role.clone(),
        organization: entry.organization.clone(),
        duration: entry.duration.clone(),
        description: entry.description.clone(),
        side: if index % 2 == 0 {
            TimelineSide::Left
        } else {
            TimelineSide::Right
        },
        achievements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::{experience_entry, sample_document};

    #[test]
    fn achievement_delays_follow_entry_and_position() {
        let mut document = sample_document();
        document.experience = vec![
            experience_entry("First", &["a", "b"]),
            experience_entry("Second", &["c", "d", "e"]),
        ];
        let store = ConfigStore::from_document(document).unwrap();

        let view = ExperienceView::build(&store);
        let delays: Vec<Vec<u64>> = view
            .timeline
            .iter()
            .map(|c| c.achievements.iter().map(|a| a.reveal_delay_ms).collect())
            .collect();

        // default experience stagger is 300ms
        assert_eq!(delays, vec![vec![500, 600], vec![800, 900, 1000]]);
    }

    #[test]
    fn timeline_alternates_sides() {
        let mut document = sample_document();
        document.experience = vec![
            experience_entry("A", &[]),
            experience_entry("B", &[]),
            experience_entry("C", &[]),
        ];
        let store = ConfigStore::from_document(document).unwrap();

        let sides: Vec<_> = ExperienceView::build(&store)
            .timeline
            .iter()
            .map(|c| c.side)
            .collect();
        assert_eq!(
            sides,
            vec![TimelineSide::Left, TimelineSide::Right, TimelineSide::Left]
        );
    }
}
