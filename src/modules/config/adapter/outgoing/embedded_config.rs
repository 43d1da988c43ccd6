use crate::modules::config::application::ports::outgoing::{ConfigLoadError, ConfigSource};

const EMBEDDED_DOCUMENT: &str = include_str!("portfolio.json");

/// The document compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedConfigSource;

impl ConfigSource for EmbeddedConfigSource {
    fn describe(&self) -> String {
        "embedded".to_string()
    }

    fn read(&self) -> Result<String, ConfigLoadError> {
        Ok(EMBEDDED_DOCUMENT.to_string())
    }
}
