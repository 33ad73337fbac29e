//! Release artifacts: the files that carry the version number
//!
//! The workflow updates the version through the [ArtifactWriter] trait.
//! [files::FileArtifactWriter] edits real files; [mock::MockArtifactWriter]
//! keeps everything in memory for tests.

pub mod files;
pub mod mock;

pub use files::FileArtifactWriter;
pub use mock::MockArtifactWriter;

use crate::error::Result;

/// Operations that persist a new version into the project
///
/// Failures are reported as [crate::error::ReleaseError::ArtifactWrite].
pub trait ArtifactWriter: Send + Sync {
    /// Rewrite the version in the application config
    fn update_version_in_config(&self, version: &str) -> Result<()>;

    /// Rewrite the version line in the environment file
    fn update_version_in_env(&self, version: &str) -> Result<()>;

    /// Insert a rendered entry above the previous releases in the changelog
    fn prepend_to_changelog(&self, entry: &str) -> Result<()>;
}
