pub mod get_section;

pub use get_section::get_section_handler;
