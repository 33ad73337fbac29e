//! Version control abstraction layer
//!
//! The release workflow only talks to version control through the
//! [VersionControl] trait, so it can run against a real repository or an
//! in-memory fake.
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: an in-memory implementation for tests
//!
//! ```rust
//! # use release_prep::git::VersionControl;
//! # fn example<V: VersionControl>(vcs: &V) -> release_prep::Result<()> {
//! let last_tag = vcs.last_tag()?;
//! let commits = vcs.commits_since_tag(last_tag.as_deref())?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::{MockRepository, VcsCall};
pub use repository::Git2Repository;

use crate::domain::CommitRecord;
use crate::error::Result;

/// Version control operations needed to prepare a release
///
/// ## Error Handling
///
/// Implementations map their underlying errors (like `git2::Error`) to
/// [crate::error::ReleaseError]. Commit and tag failures should use
/// [crate::error::ReleaseError::VcsOperation], or
/// [crate::error::ReleaseError::MissingIdentity] when no author is known.
pub trait VersionControl: Send + Sync {
    /// Whether the working location is a repository at all
    fn is_repository(&self) -> bool;

    /// Get the most recent tag reachable from HEAD
    ///
    /// Returns the tag exactly as stored (e.g. "v1.2.3" or "1.2.3"), or
    /// `None` if nothing has been tagged yet.
    fn last_tag(&self) -> Result<Option<String>>;

    /// Get commits made after `tag`, or the full history when `tag` is `None`
    ///
    /// Commits are returned newest first.
    fn commits_since_tag(&self, tag: Option<&str>) -> Result<Vec<CommitRecord>>;

    /// Create an annotated tag on HEAD
    fn create_tag(&self, name: &str, message: &str) -> Result<()>;

    /// Stage the given files and commit them
    ///
    /// Paths are relative to the repository root. Files that do not exist, and
    /// ignored files that are not already tracked, are skipped.
    fn commit(&self, files: &[String], message: &str) -> Result<()>;
}
