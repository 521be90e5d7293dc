use thiserror::Error;

/// Structural problems with a configuration document that parsed as JSON.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("configuration is empty")]
    Empty,
    #[error("configuration must be a JSON object")]
    NotAnObject,
    #[error("missing required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<&'static str>),
    #[error("{0}")]
    Malformed(String),
}

/// Errors raised while loading the configuration document.
///
/// Messages are shown to visitors verbatim, so they stay short and stable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to load configuration: {status} {reason}")]
    Fetch { status: u16, reason: String },
    #[error("Failed to load configuration: {0}")]
    Transport(String),
    #[error("Invalid configuration: {0}")]
    Parse(String),
    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),
}

impl ConfigError {
    /// HTTP status of the failed fetch, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ConfigError::Fetch { status, .. } => Some(*status),
            _ => None,
        }
    }
}
