use crate::domain::CommitRecord;
use crate::error::{ReleaseError, Result};
use crate::git::VersionControl;
use std::sync::Mutex;

/// A call made against [MockRepository], recorded in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcsCall {
    IsRepository,
    LastTag,
    CommitsSinceTag(Option<String>),
    CreateTag { name: String, message: String },
    Commit { files: Vec<String>, message: String },
}

/// In-memory repository for testing without actual git operations
pub struct MockRepository {
    is_repository: bool,
    last_tag: Option<String>,
    commits: Vec<CommitRecord>,
    commit_error: Option<String>,
    tag_error: Option<String>,
    has_identity: bool,
    calls: Mutex<Vec<VcsCall>>,
}

impl MockRepository {
    /// Create an empty repository with no tags and no commits
    pub fn new() -> Self {
        MockRepository {
            is_repository: true,
            last_tag: None,
            commits: Vec::new(),
            commit_error: None,
            tag_error: None,
            has_identity: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Behave as if the working location has no repository
    pub fn not_a_repository() -> Self {
        MockRepository {
            is_repository: false,
            ..Self::new()
        }
    }

    pub fn with_last_tag(mut self, tag: impl Into<String>) -> Self {
        self.last_tag = Some(tag.into());
        self
    }

    /// Commits returned by `commits_since_tag`, in the order given
    pub fn with_commits(mut self, commits: Vec<CommitRecord>) -> Self {
        self.commits = commits;
        self
    }

    /// Make `commit` fail with the given reason
    pub fn failing_commit(mut self, reason: impl Into<String>) -> Self {
        self.commit_error = Some(reason.into());
        self
    }

    /// Make `create_tag` fail with the given reason
    pub fn failing_tag(mut self, reason: impl Into<String>) -> Self {
        self.tag_error = Some(reason.into());
        self
    }

    /// Make `commit` and `create_tag` fail as if no git user were configured
    pub fn without_identity(mut self) -> Self {
        self.has_identity = false;
        self
    }

    fn check_identity(&self) -> Result<()> {
        if self.has_identity {
            return Ok(());
        }
        Err(ReleaseError::MissingIdentity(
            "config value 'user.name' was not found".to_string(),
        ))
    }

    /// All calls made so far
    pub fn calls(&self) -> Vec<VcsCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: VcsCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControl for MockRepository {
    fn is_repository(&self) -> bool {
        self.record(VcsCall::IsRepository);
        self.is_repository
    }

    fn last_tag(&self) -> Result<Option<String>> {
        self.record(VcsCall::LastTag);
        Ok(self.last_tag.clone())
    }

    fn commits_since_tag(&self, tag: Option<&str>) -> Result<Vec<CommitRecord>> {
        self.record(VcsCall::CommitsSinceTag(tag.map(str::to_string)));
        Ok(self.commits.clone())
    }

    fn create_tag(&self, name: &str, message: &str) -> Result<()> {
        self.record(VcsCall::CreateTag {
            name: name.to_string(),
            message: message.to_string(),
        });
        self.check_identity()?;
        match &self.tag_error {
            Some(reason) => Err(ReleaseError::vcs(reason.clone())),
            None => Ok(()),
        }
    }

    fn commit(&self, files: &[String], message: &str) -> Result<()> {
        self.record(VcsCall::Commit {
            files: files.to_vec(),
            message: message.to_string(),
        });
        self.check_identity()?;
        match &self.commit_error {
            Some(reason) => Err(ReleaseError::vcs(reason.clone())),
            None => Ok(()),
        }
    }
}
