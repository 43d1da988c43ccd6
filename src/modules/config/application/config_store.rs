use std::collections::HashSet;

use serde_json::Value;
use tracing::{info, warn};

use crate::modules::config::application::key_path::{KeyPath, KeyPathError};
use crate::modules::config::application::ports::outgoing::{ConfigLoadError, ConfigSource};
use crate::modules::config::domain::{
    NavItem, PortfolioDocument, Profile, RevealPresets, SkillCategory, SocialLink, StaticProject,
};

/// Read-only portfolio document, loaded once at startup and shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    document: PortfolioDocument,
    tree: Value,
}

impl ConfigStore {
    pub fn load(source: &dyn ConfigSource) -> Result<Self, ConfigLoadError> {
        let raw = source.read()?;
        let store = Self::from_json(&raw)?;

        info!(
            source = %source.describe(),
            categories = store.document.skills.len(),
            projects = store.document.projects.len(),
            "Portfolio document loaded"
        );
        Ok(store)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigLoadError> {
        let document: PortfolioDocument =
            serde_json::from_str(raw).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        Self::from_document(document)
    }

    pub fn from_document(document: PortfolioDocument) -> Result<Self, ConfigLoadError> {
        validate(&document)?;
        warn_on_fallback_icons(&document);

        let tree =
            serde_json::to_value(&document).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;

        Ok(Self { document, tree })
    }

    pub fn document(&self) -> &PortfolioDocument {
        &self.document
    }

    pub fn profile(&self) -> &Profile {
        &self.document.personal
    }

    pub fn navigation(&self) -> &[NavItem] {
        &self.document.navigation
    }

    pub fn skill_categories(&self) -> &[SkillCategory] {
        &self.document.skills
    }

    pub fn projects(&self) -> &[StaticProject] {
        &self.document.projects
    }

    pub fn social(&self) -> &[SocialLink] {
        &self.document.social
    }

    pub fn animations(&self) -> &RevealPresets {
        &self.document.animations
    }

    pub fn social_by_name(&self, name: &str) -> Option<&SocialLink> {
        self.document
            .social
            .iter()
            .find(|link| link.name.eq_ignore_ascii_case(name))
    }

    /// Account on the repository host, taken from the GitHub social entry.
    ///
    /// Uses the display handle without its leading `@`; falls back to the
    /// last path segment of the profile URL.
    pub fn repo_account(&self) -> Option<String> {
        let link = self.social_by_name("GitHub")?;

        let handle = link.username.trim().trim_start_matches('@').trim();
        if !handle.is_empty() && !handle.contains(char::is_whitespace) {
            return Some(handle.to_string());
        }

        link.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .map(str::trim)
            .filter(|segment| !segment.is_empty() && !segment.contains(':'))
            .map(str::to_string)
    }

    /// Reads a node by key path, e.g. `social[name="GitHub"].url`.
    pub fn lookup(&self, path: &str) -> Result<Option<&Value>, KeyPathError> {
        Ok(KeyPath::parse(path)?.resolve(&self.tree))
    }
}

fn validate(document: &PortfolioDocument) -> Result<(), ConfigLoadError> {
    if document.skills.is_empty() {
        return Err(ConfigLoadError::Invalid(
            "at least one skill category is required".to_string(),
        ));
    }

    let mut keys = HashSet::new();
    for category in &document.skills {
        if category.key.trim().is_empty() {
            return Err(ConfigLoadError::Invalid(
                "skill category key cannot be empty".to_string(),
            ));
        }
        if !keys.insert(category.key.as_str()) {
            return Err(ConfigLoadError::Invalid(format!(
                "duplicate skill category '{}'",
                category.key
            )));
        }
        if let Some(entry) = category
            .entries
            .iter()
            .find(|entry| entry.level.is_some_and(|level| level > 100))
        {
            return Err(ConfigLoadError::Invalid(format!(
                "skill '{}' has a level above 100",
                entry.name
            )));
        }
    }

    if let Some(item) = document
        .navigation
        .iter()
        .find(|item| !item.href.starts_with('#'))
    {
        return Err(ConfigLoadError::Invalid(format!(
            "navigation entry '{}' must point to an in-page anchor",
            item.label
        )));
    }

    if let Some((section, preset)) = document
        .animations
        .named()
        .into_iter()
        .find(|(_, preset)| !(0.0..=1.0).contains(&preset.threshold))
    {
        return Err(ConfigLoadError::Invalid(format!(
            "reveal threshold for '{}' must be within 0.0..=1.0, got {}",
            section, preset.threshold
        )));
    }

    Ok(())
}

fn warn_on_fallback_icons(document: &PortfolioDocument) {
    let skills = document
        .skills
        .iter()
        .flat_map(|category| category.entries.iter())
        .filter(|entry| entry.icon.is_fallback())
        .map(|entry| entry.name.as_str());
    let social = document
        .social
        .iter()
        .filter(|link| link.icon.is_fallback())
        .map(|link| link.name.as_str());

    for name in skills.chain(social) {
        warn!(entry = name, "Unknown icon key, using fallback glyph");
    }
}
