use std::time::Duration;

use serde::Serialize;

use crate::modules::config::application::ConfigStore;
use crate::modules::reveal::domain::RevealConfig;
use crate::modules::sections::domain::{CallToAction, SectionId};
use crate::modules::typewriter::application::Typewriter;
use crate::modules::typewriter::domain::Frame;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroView {
    pub greeting: String,
    pub name: String,
    pub title: String,
    pub tagline: String,
    /// Prefix schedule for the typed title; it shows empty until the first frame.
    pub title_frames: Vec<Frame>,
    pub calls_to_action: Vec<CallToAction>,
    pub reveal: RevealConfig,
}

impl HeroView {
    pub fn build(store: &ConfigStore, typing_delay: Duration) -> Self {
        let profile = store.profile();
        let typewriter = Typewriter::new(profile.title.clone(), typing_delay);

        Self {
            greeting: "Hello, I'm".to_string(),
            name: profile.name.clone(),
            title: profile.title.clone(),
            tagline: profile.tagline.clone(),
            title_frames: typewriter.frames(),
            calls_to_action: vec![
                CallToAction::scroll("View My Work", SectionId::Projects),
                CallToAction::scroll("Download Resume", SectionId::Contact),
            ],
            reveal: store.animations().hero.clone(),
        }
    }
}
