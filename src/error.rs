use thiserror::Error;

/// Unified error type for release preparation
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Invalid version format: '{0}' - expected X.Y.Z")]
    InvalidFormat(String),

    #[error("Invalid release type: '{0}' - expected one of major, minor, patch")]
    InvalidReleaseKind(String),

    #[error("Not a git repository: {0}")]
    NotARepository(String),

    #[error("Failed to write {path}: {reason}")]
    ArtifactWrite { path: String, reason: String },

    #[error("Git operation failed: {0}")]
    VcsOperation(String),

    #[error("Git user not configured: {0}")]
    MissingIdentity(String),

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-prep
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a version format error for the given input
    pub fn invalid_format(input: impl Into<String>) -> Self {
        ReleaseError::InvalidFormat(input.into())
    }

    /// Create a release kind error for the given input
    pub fn invalid_release_kind(input: impl Into<String>) -> Self {
        ReleaseError::InvalidReleaseKind(input.into())
    }

    /// Create an artifact write error for a file path
    pub fn artifact_write(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ReleaseError::ArtifactWrite {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a version control error with context
    pub fn vcs(msg: impl Into<String>) -> Self {
        ReleaseError::VcsOperation(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Validation failures are raised before anything has been mutated.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ReleaseError::InvalidFormat(_)
                | ReleaseError::InvalidReleaseKind(_)
                | ReleaseError::NotARepository(_)
        )
    }
}
