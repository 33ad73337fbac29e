use std::fmt;

/// How to fix a commit that failed for lack of a git identity
pub const IDENTITY_HINT: &str = "Configure git before committing:\n    \
git config user.name \"Your Name\"\n    \
git config user.email \"your.email@example.com\"\n  \
or set [git] user_name and user_email in release-prep.toml";

/// Non-fatal issues raised while preparing a release.
///
/// The version has already been resolved when any of these occur, so they are
/// reported to the user rather than aborting the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseWarning {
    /// Nothing was committed since the last tag, so no changelog entry was written
    NoNewCommits { since_tag: Option<String> },
    /// The release commit could not be created
    CommitFailed {
        reason: String,
        missing_identity: bool,
    },
    /// The release tag could not be created
    TagFailed { tag: String, reason: String },
}

impl fmt::Display for ReleaseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseWarning::NoNewCommits {
                since_tag: Some(tag),
            } => write!(f, "No new commits since tag '{}'", tag),
            ReleaseWarning::NoNewCommits { since_tag: None } => {
                write!(f, "No commits found in repository history")
            }
            ReleaseWarning::CommitFailed {
                reason,
                missing_identity,
            } => {
                write!(f, "No changes to commit or commit failed: {}", reason)?;
                if *missing_identity {
                    write!(f, "\n  {}", IDENTITY_HINT)?;
                }
                Ok(())
            }
            ReleaseWarning::TagFailed { tag, reason } => {
                write!(f, "Failed to create tag '{}': {}", tag, reason)
            }
        }
    }
}
