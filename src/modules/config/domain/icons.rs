use serde::{Deserialize, Serialize};

/// Every icon the portfolio document may reference.
///
/// Unknown keys deserialize to [`IconId::Fallback`] so a typo in the
/// document degrades to a generic glyph instead of failing the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconId {
    Code,
    Code2,
    Coffee,
    Terminal,
    FileCode,
    Globe,
    Database,
    DatabaseZap,
    Component,
    Palette,
    Server,
    Route,
    GitBranch,
    Gamepad2,
    Zap,
    Monitor,
    Github,
    Linkedin,
    Mail,
    MapPin,
    Phone,
    Calendar,
    Building,
    Star,
    ExternalLink,
    #[serde(other)]
    Fallback,
}

impl IconId {
    /// Glyph identifier handed to the client icon set.
    pub fn glyph(&self) -> &'static str {
        match self {
            IconId::Code => "code",
            IconId::Code2 => "code-xml",
            IconId::Coffee => "coffee",
            IconId::Terminal => "terminal",
            IconId::FileCode => "file-code",
            IconId::Globe => "globe",
            IconId::Database => "database",
            IconId::DatabaseZap => "database-zap",
            IconId::Component => "component",
            IconId::Palette => "palette",
            IconId::Server => "server",
            IconId::Route => "route",
            IconId::GitBranch => "git-branch",
            IconId::Gamepad2 => "gamepad-2",
            IconId::Zap => "zap",
            IconId::Monitor => "monitor",
            IconId::Github => "github",
            IconId::Linkedin => "linkedin",
            IconId::Mail => "mail",
            IconId::MapPin => "map-pin",
            IconId::Phone => "phone",
            IconId::Calendar => "calendar",
            IconId::Building => "building",
            IconId::Star => "star",
            IconId::ExternalLink => "external-link",
            IconId::Fallback => "circle-help",
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, IconId::Fallback)
    }
}
