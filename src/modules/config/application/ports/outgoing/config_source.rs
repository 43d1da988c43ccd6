#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Failed to read portfolio document: {0}")]
    Io(String),

    #[error("Malformed portfolio document: {0}")]
    Parse(String),

    #[error("Invalid portfolio document: {0}")]
    Invalid(String),
}

/// Where the portfolio document comes from.
pub trait ConfigSource: Send + Sync {
    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;

    fn read(&self) -> Result<String, ConfigLoadError>;
}
