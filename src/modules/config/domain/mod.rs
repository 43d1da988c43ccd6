pub mod entities;
pub mod icons;

pub use entities::{
    EducationEntry, ExperienceEntry, Highlight, NavItem, PortfolioDocument, Profile,
    RevealPresets, SkillCategory, SkillEntry, SocialLink, StaticProject,
};
pub use icons::IconId;
