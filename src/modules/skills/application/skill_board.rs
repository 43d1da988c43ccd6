use serde::Serialize;

use crate::modules::config::domain::{SkillCategory, SkillEntry};
use crate::modules::reveal::application::RevealOnView;
use crate::modules::reveal::domain::{ChildReveal, RevealConfig, RevealPhase};

//
// ──────────────────────────────────────────────────────────
// Views
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillTab {
    pub key: String,
    pub title: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCard {
    pub name: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    pub icon: &'static str,
    pub reveal_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillBoardView {
    pub tabs: Vec<SkillTab>,
    pub active: Option<String>,
    pub grid: Vec<SkillCard>,
    pub reveal: RevealPhase,
    pub reveal_config: RevealConfig,
}

//
// ──────────────────────────────────────────────────────────
// Board
// ──────────────────────────────────────────────────────────
//

/// Tabbed filter over the skill taxonomy.
///
/// The grid reveal is keyed by the active category, so each tab switch
/// resets and replays the stagger for the new set.
#[derive(Debug, Clone)]
pub struct SkillBoard {
    categories: Vec<SkillCategory>,
    active: Option<String>,
    reveal: RevealOnView<Option<String>>,
}

impl SkillBoard {
    pub fn new(categories: &[SkillCategory], reveal: RevealConfig) -> Self {
        let active = categories.first().map(|c| c.key.clone());
        Self {
            categories: categories.to_vec(),
            reveal: RevealOnView::keyed(reveal, active.clone()),
            active,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Switches the active tab. Returns `true` when the grid reveal replayed.
    pub fn select(&mut self, category: &str) -> bool {
        if self.active.as_deref() == Some(category) {
            return false;
        }
        self.active = Some(category.to_string());
        self.reveal.rekey(self.active.clone())
    }

    pub fn on_intersection(&mut self, ratio: f32) -> bool {
        self.reveal.on_intersection(ratio)
    }

    /// Renders without an observation signal.
    pub fn fail_open(&mut self) {
        self.reveal.fail_open();
    }

    pub fn reveal_phase(&self) -> RevealPhase {
        self.reveal.phase()
    }

    /// Entries of the active category; an unknown category yields nothing.
    pub fn grid(&self) -> &[SkillEntry] {
        self.active
            .as_deref()
            .and_then(|key| self.categories.iter().find(|c| c.key == key))
            .map(|c| c.entries.as_slice())
            .unwrap_or(&[])
    }

    pub fn tabs(&self) -> Vec<SkillTab> {
        self.categories
            .iter()
            .map(|c| SkillTab {
                key: c.key.clone(),
                title: c.title.clone(),
                active: self.active.as_deref() == Some(c.key.as_str()),
            })
            .collect()
    }

    pub fn stagger(&self) -> Vec<ChildReveal> {
        self.reveal.config().schedule(self.grid().len())
    }

    pub fn view(&self) -> SkillBoardView {
        let category = self.active.clone().unwrap_or_default();
        let grid = self
            .grid()
            .iter()
            .zip(self.stagger())
            .map(|(entry, slot)| SkillCard {
                name: entry.name.clone(),
                category: category.clone(),
                level: entry.level,
                icon: entry.icon.glyph(),
                reveal_delay_ms: slot.delay_ms,
            })
            .collect();

        SkillBoardView {
            tabs: self.tabs(),
            active: self.active.clone(),
            grid,
            reveal: self.reveal.phase(),
            reveal_config: self.reveal.config().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::config::domain::IconId;
    use crate::modules::reveal::domain::VisualState;

    fn entry(name: &str) -> SkillEntry {
        SkillEntry {
            name: name.to_string(),
            level: Some(80),
            icon: IconId::Code,
        }
    }

    fn taxonomy() -> Vec<SkillCategory> {
        vec![
            SkillCategory {
                key: "languages".to_string(),
                title: "Languages".to_string(),
                entries: vec![entry("Rust"), entry("C"), entry("Python")],
            },
            SkillCategory {
                key: "tools".to_string(),
                title: "Tools".to_string(),
                entries: vec![entry("Git")],
            },
        ]
    }

    fn board() -> SkillBoard {
        SkillBoard::new(
            &taxonomy(),
            RevealConfig::new(0.3, 100, 500, VisualState::growing(0.8)),
        )
    }

    #[test]
    fn first_category_is_active_initially() {
        let board = board();

        assert_eq!(board.active(), Some("languages"));
        assert_eq!(
            board.grid().iter().map(|e| e.name.as_str()).collect::<Vec<_>>(),
            vec!["Rust", "C", "Python"]
        );
    }

    #[test]
    fn selecting_replaces_grid() {
        let mut board = board();
        board.select("tools");

        assert_eq!(board.grid(), &[entry("Git")]);
        assert_eq!(
            board.tabs().iter().filter(|t| t.active).map(|t| t.key.as_str()).collect::<Vec<_>>(),
            vec!["tools"]
        );
    }

    #[test]
    fn unknown_category_renders_empty_grid() {
        let mut board = board();
        board.select("cooking");

        assert!(board.grid().is_empty());
        assert!(board.view().grid.is_empty());
        assert!(board.tabs().iter().all(|t| !t.active));
    }

    #[test]
    fn empty_taxonomy_has_no_active_tab() {
        let board = SkillBoard::new(&[], RevealConfig::default());

        assert_eq!(board.active(), None);
        assert!(board.grid().is_empty());
    }

    #[test]
    fn switching_category_replays_reveal() {
        let mut board = board();
        assert!(board.on_intersection(0.5));
        assert_eq!(board.reveal_phase(), RevealPhase::Revealed { generation: 1 });

        assert!(board.select("tools"));
        assert_eq!(board.reveal_phase(), RevealPhase::Revealed { generation: 2 });

        assert!(board.select("languages"));
        assert_eq!(board.reveal_phase(), RevealPhase::Revealed { generation: 3 });
    }

    #[test]
    fn reselecting_active_category_does_not_replay() {
        let mut board = board();
        board.on_intersection(0.5);

        assert!(!board.select("languages"));
        assert_eq!(board.reveal_phase(), RevealPhase::Revealed { generation: 1 });
    }

    #[test]
    fn view_carries_stagger_per_card() {
        let mut board = board();
        board.fail_open();
        let view = board.view();

        assert_eq!(
            view.grid.iter().map(|c| c.reveal_delay_ms).collect::<Vec<_>>(),
            vec![0, 100, 200]
        );
        assert_eq!(view.grid[0].icon, "code");
        assert_eq!(view.grid[0].category, "languages");
        assert!(view.reveal.is_revealed());
    }
}
