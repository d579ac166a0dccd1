//! Error types for the CLI application.

use kindred_relate::RelateError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Relationship engine error
    #[error(transparent)]
    Relate(#[from] RelateError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The query did not finish within the allowed time
    #[error("Query timed out after {0} second(s)")]
    Timeout(u64),

    /// The blocking query task panicked or was cancelled
    #[error("Query task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// Scripts can tell "unrelated" (2) apart from a bad ID or input (3) and
    /// from everything else (1).
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Relate(RelateError::Unrelated) => 2,
            CliError::Relate(RelateError::PersonNotFound(_)) | CliError::InvalidInput(_) => 3,
            _ => 1,
        }
    }
}
