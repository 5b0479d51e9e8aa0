use thiserror::Error;

/// Unified error type for release mining operations
#[derive(Error, Debug)]
pub enum MiningError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Commit graph integrity violation: {0}")]
    GraphIntegrity(String),

    #[error("Misplaced timestamp: {0}")]
    MisplacedTime(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-mine
pub type Result<T> = std::result::Result<T, MiningError>;

impl MiningError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        MiningError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        MiningError::Version(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        MiningError::Tag(msg.into())
    }

    /// Create a graph integrity error with context
    pub fn graph(msg: impl Into<String>) -> Self {
        MiningError::GraphIntegrity(msg.into())
    }

    /// Create a misplaced-time error with context
    pub fn misplaced_time(msg: impl Into<String>) -> Self {
        MiningError::MisplacedTime(msg.into())
    }

    /// Fatal errors abort the mining run; everything else is skippable
    /// at the per-tag/per-release loop level.
    pub fn is_fatal(&self) -> bool {
        matches!(self, MiningError::GraphIntegrity(_))
    }
}
