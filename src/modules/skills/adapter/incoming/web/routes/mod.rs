pub mod get_skills;

pub use get_skills::get_skills_handler;
