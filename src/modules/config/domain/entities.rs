use serde::{Deserialize, Deserializer, Serialize};

use crate::modules::config::domain::icons::IconId;
use crate::modules::reveal::domain::{RevealConfig, VisualState};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PortfolioDocument {
    pub personal: Profile,
    #[serde(default)]
    pub navigation: Vec<NavItem>,
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub projects: Vec<StaticProject>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    #[serde(default)]
    pub animations: RevealPresets,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub email: String,
    pub location: String,
    pub bio: String,
    #[serde(default, deserialize_with = "non_blank")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub availability: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SkillCategory {
    pub key: String,
    pub title: String,
    pub entries: Vec<SkillEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SkillEntry {
    pub name: String,
    #[serde(default)]
    pub level: Option<u8>,
    pub icon: IconId,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StaticProject {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub github: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub live: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExperienceEntry {
    pub role: String,
    #[serde(alias = "company")]
    pub organization: String,
    pub duration: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EducationEntry {
    pub title: String,
    pub institution: String,
    pub duration: String,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Highlight {
    pub label: String,
    pub value: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: IconId,
    pub username: String,
}

/// Entrance-animation settings per page section.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RevealPresets {
    pub hero: RevealConfig,
    pub about: RevealConfig,
    pub projects: RevealConfig,
    pub skills: RevealConfig,
    pub experience: RevealConfig,
    pub contact: RevealConfig,
}

impl Default for RevealPresets {
    fn default() -> Self {
        Self {
            hero: RevealConfig::new(0.0, 200, 800, VisualState::rising(30.0)),
            about: RevealConfig::new(0.3, 200, 600, VisualState::rising(20.0)),
            projects: RevealConfig::new(0.2, 200, 600, VisualState::rising(30.0)),
            skills: RevealConfig::new(0.3, 100, 500, VisualState::growing(0.8)),
            experience: RevealConfig::new(0.2, 300, 600, VisualState::sliding(-50.0)),
            contact: RevealConfig::new(0.3, 200, 600, VisualState::rising(20.0)),
        }
    }
}

impl RevealPresets {
    pub fn named(&self) -> [(&'static str, &RevealConfig); 6] {
        [
            ("hero", &self.hero),
            ("about", &self.about),
            ("projects", &self.projects),
            ("skills", &self.skills),
            ("experience", &self.experience),
            ("contact", &self.contact),
        ]
    }
}

/// Empty or whitespace-only strings mean "not provided".
fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
