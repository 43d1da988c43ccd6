use serde::Serialize;

use crate::modules::config::application::ConfigStore;
use crate::modules::config::domain::IconId;
use crate::modules::reveal::domain::RevealConfig;
use crate::modules::sections::application::footer::SocialCard;

pub const DEFAULT_AVAILABILITY: &str = "Open to new opportunities";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactDetail {
    pub label: &'static str,
    pub value: String,
    pub icon: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Info panels beside the contact form: direct details and social links.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactView {
    pub details: Vec<ContactDetail>,
    pub social: Vec<SocialCard>,
    pub reveal: RevealConfig,
}

impl ContactView {
    pub fn build(store: &ConfigStore) -> Self {
        let profile = store.profile();

        let availability = profile
            .availability
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(DEFAULT_AVAILABILITY);

        let details = vec![
            ContactDetail {
                label: "Email",
                value: profile.email.clone(),
                icon: IconId::Mail.glyph(),
                href: Some(format!("mailto:{}", profile.email)),
            },
            ContactDetail {
                label: "Location",
                value: profile.location.clone(),
                icon: IconId::MapPin.glyph(),
                href: None,
            },
            ContactDetail {
                label: "Availability",
                value: availability.to_string(),
                icon: IconId::Phone.glyph(),
                href: None,
            },
        ];

        Self {
            details,
            social: store.social().iter().map(SocialCard::from).collect(),
            reveal: store.animations().contact.clone(),
        }
    }
}
