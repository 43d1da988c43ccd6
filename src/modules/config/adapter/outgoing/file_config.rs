use std::path::PathBuf;

use crate::modules::config::application::ports::outgoing::{ConfigLoadError, ConfigSource};

/// A JSON document on disk, read once at startup.
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigSource for FileConfigSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<String, ConfigLoadError> {
        std::fs::read_to_string(&self.path)
            .map_err(|e| ConfigLoadError::Io(format!("{}: {}", self.path.display(), e)))
    }
}
