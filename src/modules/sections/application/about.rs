use serde::Serialize;

use crate::modules::config::application::ConfigStore;
use crate::modules::config::domain::Highlight;
use crate::modules::reveal::domain::RevealConfig;
use crate::modules::sections::domain::{CallToAction, SectionId};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutView {
    pub name: String,
    pub bio: String,
    pub location: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    pub highlights: Vec<Highlight>,
    pub call_to_action: CallToAction,
    pub reveal: RevealConfig,
}

impl AboutView {
    pub fn build(store: &ConfigStore) -> Self {
        let profile = store.profile();

        Self {
            name: profile.name.clone(),
            bio: profile.bio.clone(),
            location: profile.location.clone(),
            email: profile.email.clone(),
            image: profile.image.clone(),
            availability: profile
                .availability
                .clone()
                .filter(|a| !a.trim().is_empty()),
            highlights: store.document().highlights.clone(),
            call_to_action: CallToAction::scroll("Let's Work Together", SectionId::Contact),
            reveal: store.animations().about.clone(),
        }
    }
}
