use serde::{Deserialize, Serialize};

/// Anchored regions of the single page, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    About,
    Projects,
    Skills,
    Experience,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Contact => "contact",
        }
    }

    pub fn anchor(&self) -> String {
        format!("#{}", self.as_str())
    }

    /// Accepts `#about` or `about`, case-insensitive.
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let id = anchor.trim().trim_start_matches('#');
        Self::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(id))
    }
}

/// Instruction for the renderer to bring a section into view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrollCommand {
    pub target: SectionId,
    pub anchor: String,
    pub smooth: bool,
}

impl ScrollCommand {
    pub fn to(target: SectionId) -> Self {
        Self {
            target,
            anchor: target.anchor(),
            smooth: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CtaAction {
    Scroll(ScrollCommand),
    Open { url: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub label: String,
    pub action: CtaAction,
}

impl CallToAction {
    pub fn scroll(label: &str, target: SectionId) -> Self {
        Self {
            label: label.to_string(),
            action: CtaAction::Scroll(ScrollCommand::to(target)),
        }
    }

    pub fn open(label: &str, url: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            action: CtaAction::Open { url: url.into() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_round_trip_for_every_section() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(&section.anchor()), Some(section));
        }
    }

    #[test]
    fn unknown_anchor_is_none() {
        assert_eq!(SectionId::from_anchor("#blog"), None);
        assert_eq!(SectionId::from_anchor(""), None);
    }

    #[test]
    fn from_anchor_is_lenient() {
        assert_eq!(SectionId::from_anchor(" About "), Some(SectionId::About));
    }

    #[test]
    fn scroll_cta_serializes_with_kind() {
        let cta = CallToAction::scroll("View My Work", SectionId::Projects);
        let json = serde_json::to_value(&cta).unwrap();

        assert_eq!(json["action"]["kind"], "scroll");
        assert_eq!(json["action"]["anchor"], "#projects");
        assert_eq!(json["action"]["smooth"], true);
    }
}
