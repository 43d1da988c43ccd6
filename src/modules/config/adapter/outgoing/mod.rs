pub mod embedded_config;
pub mod file_config;

pub use embedded_config::EmbeddedConfigSource;
pub use file_config::FileConfigSource;
