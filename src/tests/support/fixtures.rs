use maplit::hashmap;

use crate::modules::config::domain::{
    EducationEntry, ExperienceEntry, Highlight, IconId, NavItem, PortfolioDocument, Profile,
    RevealPresets, SkillCategory, SkillEntry, SocialLink, StaticProject,
};
use crate::modules::projects::domain::RemoteRepo;

pub fn social_link(name: &str, url: &str, username: &str) -> SocialLink {
    let icons = hashmap! {
        "GitHub" => IconId::Github,
        "LinkedIn" => IconId::Linkedin,
        "Email" => IconId::Mail,
    };

    SocialLink {
        name: name.to_string(),
        url: url.to_string(),
        icon: icons.get(name).copied().unwrap_or(IconId::Fallback),
        username: username.to_string(),
    }
}

fn skill(name: &str, level: u8, icon: IconId) -> SkillEntry {
    SkillEntry {
        name: name.to_string(),
        level: Some(level),
        icon,
    }
}

fn nav(label: &str, href: &str) -> NavItem {
    NavItem {
        label: label.to_string(),
        href: href.to_string(),
    }
}

pub fn static_project(title: &str, featured: bool) -> StaticProject {
    StaticProject {
        title: title.to_string(),
        description: format!("{} description", title),
        tech: vec!["Rust".to_string()],
        image: None,
        github: Some(format!("https://github.com/someone/{}", title.to_lowercase())),
        live: Some(format!("https://{}.example.com", title.to_lowercase())),
        featured,
    }
}

pub fn experience_entry(role: &str, achievements: &[&str]) -> ExperienceEntry {
    ExperienceEntry {
        role: role.to_string(),
        organization: "Acme".to_string(),
        duration: "2022 - Present".to_string(),
        description: format!("{} at Acme", role),
        achievements: achievements.iter().map(|a| a.to_string()).collect(),
    }
}

pub fn remote_repo(id: u64, name: &str, topics: &[&str]) -> RemoteRepo {
    RemoteRepo {
        id,
        name: name.to_string(),
        description: Some(format!("{} repository", name)),
        html_url: format!("https://github.com/someone/{}", name),
        homepage: None,
        topics: topics.iter().map(|t| t.to_string()).collect(),
        stargazers_count: 0,
        language: Some("Rust".to_string()),
    }
}

/// Small document with two skill categories (`languages`, `tools`) and a GitHub account `someone`.
pub fn sample_document() -> PortfolioDocument {
    PortfolioDocument {
        personal: Profile {
            name: "Sam Example".to_string(),
            title: "Software Engineer".to_string(),
            tagline: "Building dependable things".to_string(),
            email: "sam@example.com".to_string(),
            location: "Manila, PH".to_string(),
            bio: "I write software.".to_string(),
            image: None,
            availability: Some("Open to work".to_string()),
        },
        navigation: vec![
            nav("About", "#about"),
            nav("Projects", "#projects"),
            nav("Skills", "#skills"),
            nav("Experience", "#experience"),
            nav("Contact", "#contact"),
        ],
        skills: vec![
            SkillCategory {
                key: "languages".to_string(),
                title: "Languages".to_string(),
                entries: vec![
                    skill("Rust", 90, IconId::Code),
                    skill("Python", 80, IconId::Terminal),
                ],
            },
            SkillCategory {
                key: "tools".to_string(),
                title: "Tools".to_string(),
                entries: vec![skill("Git", 85, IconId::GitBranch)],
            },
        ],
        projects: vec![
            static_project("Curated", true),
            static_project("Sokoban", false),
        ],
        experience: vec![experience_entry("Engineer", &["Shipped things"])],
        education: vec![EducationEntry {
            title: "BS Computer Science".to_string(),
            institution: "State University".to_string(),
            duration: "2018 - 2022".to_string(),
            details: vec![],
        }],
        highlights: vec![Highlight {
            label: "Clean Code".to_string(),
            value: "Always".to_string(),
        }],
        social: vec![
            social_link("GitHub", "https://github.com/someone", "@someone"),
            social_link("Email", "mailto:sam@example.com", "sam@example.com"),
        ],
        animations: RevealPresets::default(),
    }
}
