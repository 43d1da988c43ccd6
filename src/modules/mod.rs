pub mod config;
pub mod contact;
pub mod email;
pub mod projects;
pub mod reveal;
pub mod sections;
pub mod skills;
pub mod typewriter;
