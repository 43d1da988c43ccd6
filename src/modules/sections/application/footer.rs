use serde::Serialize;

use crate::modules::config::application::ConfigStore;
use crate::modules::config::domain::SocialLink;
use crate::modules::sections::application::navigation::Navigation;
use crate::modules::sections::domain::{CallToAction, ScrollCommand, SectionId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialCard {
    pub name: String,
    pub url: String,
    pub username: String,
    pub icon: &'static str,
}

impl From<&SocialLink> for SocialCard {
    fn from(link: &SocialLink) -> Self {
        Self {
            name: link.name.clone(),
            url: link.url.clone(),
            username: link.username.clone(),
            icon: link.icon.glyph(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterView {
    pub brand: String,
    pub tagline: String,
    pub navigation: Navigation,
    pub social: Vec<SocialCard>,
    pub copyright: String,
    pub hire_me: CallToAction,
    pub email_me: CallToAction,
    pub back_to_top: ScrollCommand,
}

impl FooterView {
    pub fn build(store: &ConfigStore, year: i32) -> Self {
        let profile = store.profile();

        let social = store.social().iter().map(SocialCard::from).collect();

        Self {
            brand: profile.name.clone(),
            tagline: profile.title.clone(),
            navigation: Navigation::from_items(store.navigation()),
            social,
            copyright: format!("© {} {}. All rights reserved.", year, profile.name),
            hire_me: CallToAction::scroll("Hire Me", SectionId::Contact),
            email_me: CallToAction::open("Email Me", format!("mailto:{}", profile.email)),
            back_to_top: ScrollCommand::to(SectionId::Hero),
        }
    }
}
