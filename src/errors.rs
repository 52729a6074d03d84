use thiserror::Error;

/// Custom error types for the gr1spec system
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("Invalid proposition: {0}")]
    InvalidProposition(String),

    #[error("Unknown kind for proposition: {0}")]
    UnknownProposition(String),

    #[error("Invalid outcome labels: {0}")]
    InvalidOutcomes(String),

    #[error("Malformed transition system: {0}")]
    MalformedTransitionSystem(String),

    #[error("Unknown specification section: {0}")]
    UnknownSection(String),

    #[error("Unsupported: {0}")]
    Unsupported(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
}

/// Result type specific to gr1spec operations
pub type SpecResult<T> = Result<T, SpecError>;
