use serde::Serialize;
use tracing::warn;

use crate::modules::config::domain::NavItem;
use crate::modules::sections::domain::{ScrollCommand, SectionId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub scroll: ScrollCommand,
}

/// In-page navigation; every link resolves to a known section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Navigation {
    pub links: Vec<NavLink>,
}

impl Navigation {
    pub fn from_items(items: &[NavItem]) -> Self {
        let links = items
            .iter()
            .filter_map(|item| match SectionId::from_anchor(&item.href) {
                Some(section) => Some(NavLink {
                    label: item.label.clone(),
                    scroll: ScrollCommand::to(section),
                }),
                None => {
                    warn!(label = %item.label, href = %item.href, "Navigation entry points to no section, skipping");
                    None
                }
            })
            .collect();

        Self { links }
    }

    pub fn resolve(&self, anchor: &str) -> Option<ScrollCommand> {
        let section = SectionId::from_anchor(anchor)?;
        self.links
            .iter()
            .find(|link| link.scroll.target == section)
            .map(|link| link.scroll.clone())
    }
}
