//! Error types for the transport layer. The kernel itself is infallible.

/// Invalid runtime configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid port {value:?}: {reason}")]
    InvalidPort { value: String, reason: String },

    #[error("invalid confidence threshold {value:?}: {reason}")]
    InvalidThreshold { value: String, reason: String },

    #[error("invalid chat message limit {value:?}: {reason}")]
    InvalidMessageLimit { value: String, reason: String },
}

/// Server startup and runtime failures.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fixture lookup failures. All of them surface to clients as "not found".
#[derive(Debug, thiserror::Error)]
pub enum MockError {
    #[error("mock file not found: {0}")]
    NotFound(String),

    #[error("rejected mock path segment: {0:?}")]
    InvalidPath(String),

    #[error("I/O error reading mock: {0}")]
    Io(#[from] std::io::Error),

    #[error("mock is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
