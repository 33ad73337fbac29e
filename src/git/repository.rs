use crate::domain::{CommitRecord, SemanticVersion};
use crate::error::{ReleaseError, Result};
use crate::git::VersionControl;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use git2::{Commit, ErrorCode, Oid, Repository as Git2Repo, Signature, Sort};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// [VersionControl] backed by a git repository at an explicit working directory
///
/// The repository is opened per operation, so the adapter can be created
/// before the directory is known to be a repository.
#[derive(Debug, Clone)]
pub struct Git2Repository {
    workdir: PathBuf,
    identity: Option<(String, String)>,
}

impl Git2Repository {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Git2Repository {
            workdir: workdir.into(),
            identity: None,
        }
    }

    /// Commit and tag as `name <email>` when git has no user configured
    pub fn with_identity(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.identity = Some((name.into(), email.into()));
        self
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Short name of the checked-out branch, `None` when HEAD is detached or unborn
    pub fn current_branch(&self) -> Result<Option<String>> {
        let repo = self.open()?;
        let head = match repo.head() {
            Ok(head) => head,
            Err(e) if e.code() == ErrorCode::UnbornBranch => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if !head.is_branch() {
            return Ok(None);
        }
        Ok(head.shorthand().map(str::to_string))
    }

    fn open(&self) -> Result<Git2Repo> {
        Git2Repo::open(&self.workdir).map_err(|e| {
            ReleaseError::NotARepository(format!("{}: {}", self.workdir.display(), e.message()))
        })
    }

    /// HEAD commit id, or `None` for a repository without commits
    fn head_oid(repo: &Git2Repo) -> Result<Option<Oid>> {
        match repo.head() {
            Ok(head) => Ok(Some(head.peel_to_commit()?.id())),
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Map every tagged commit to the names of the tags pointing at it
    fn tagged_commits(repo: &Git2Repo) -> Result<HashMap<Oid, Vec<String>>> {
        let mut tagged: HashMap<Oid, Vec<String>> = HashMap::new();

        for name in repo.tag_names(None)?.iter().flatten() {
            let Ok(reference) = repo.find_reference(&format!("refs/tags/{}", name)) else {
                continue;
            };
            // Tags on trees or blobs cannot be reached from HEAD
            if let Ok(commit) = reference.peel_to_commit() {
                tagged.entry(commit.id()).or_default().push(name.to_string());
            }
        }

        Ok(tagged)
    }

    /// Highest parseable version first, then the greatest name
    fn pick_tag(mut names: Vec<String>) -> Option<String> {
        names.sort_by(|a, b| {
            let va = SemanticVersion::parse(a).ok();
            let vb = SemanticVersion::parse(b).ok();
            va.cmp(&vb).then_with(|| a.cmp(b))
        });
        names.pop()
    }

    fn to_record(commit: &Commit<'_>) -> Result<CommitRecord> {
        let short_hash = commit
            .as_object()
            .short_id()?
            .as_str()
            .unwrap_or_default()
            .to_string();
        let author = commit.author();
        let message = commit.summary().unwrap_or("(empty message)").to_string();

        Ok(CommitRecord {
            message,
            short_hash,
            author: author.name().unwrap_or("unknown").to_string(),
            date: commit_date(author.when()),
        })
    }

    /// Repository signature, falling back to the configured identity
    fn signature(&self, repo: &Git2Repo) -> Result<Signature<'static>> {
        match repo.signature() {
            Ok(signature) => Ok(signature),
            Err(e) => match &self.identity {
                Some((name, email)) => {
                    debug!(%name, %email, "git user not configured, using release identity");
                    Ok(Signature::now(name, email)?)
                }
                None => Err(ReleaseError::MissingIdentity(e.message().to_string())),
            },
        }
    }

    /// Stage existing files; ignored files are skipped unless already tracked
    fn stage(&self, repo: &Git2Repo, files: &[String]) -> Result<Oid> {
        let mut index = repo.index()?;

        for file in files {
            let path = Path::new(file);
            if !self.workdir.join(path).exists() {
                debug!(file = %file, "skipping missing file");
                continue;
            }
            if index.get_path(path, 0).is_none() && repo.status_should_ignore(path)? {
                debug!(file = %file, "skipping ignored file");
                continue;
            }
            index.add_path(path)?;
        }

        index.write()?;
        Ok(index.write_tree()?)
    }
}

/// Author date in the author's own timezone
fn commit_date(time: git2::Time) -> NaiveDate {
    let utc = DateTime::<Utc>::from_timestamp(time.seconds(), 0).unwrap_or_default();
    match FixedOffset::east_opt(time.offset_minutes() * 60) {
        Some(offset) => utc.with_timezone(&offset).date_naive(),
        None => utc.date_naive(),
    }
}

impl VersionControl for Git2Repository {
    fn is_repository(&self) -> bool {
        Git2Repo::open(&self.workdir).is_ok()
    }

    fn last_tag(&self) -> Result<Option<String>> {
        let repo = self.open()?;
        let Some(head) = Self::head_oid(&repo)? else {
            return Ok(None);
        };

        let mut tagged = Self::tagged_commits(&repo)?;
        if tagged.is_empty() {
            return Ok(None);
        }

        let mut revwalk = repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head)?;

        for oid in revwalk {
            if let Some(names) = tagged.remove(&oid?) {
                let tag = Self::pick_tag(names);
                debug!(?tag, "found last tag");
                return Ok(tag);
            }
        }

        Ok(None)
    }

    fn commits_since_tag(&self, tag: Option<&str>) -> Result<Vec<CommitRecord>> {
        let repo = self.open()?;
        let Some(head) = Self::head_oid(&repo)? else {
            return Ok(Vec::new());
        };

        let mut revwalk = repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head)?;

        if let Some(tag) = tag {
            let tagged = repo
                .revparse_single(&format!("refs/tags/{}", tag))
                .and_then(|object| object.peel_to_commit())
                .map_err(|e| ReleaseError::vcs(format!("Cannot resolve tag '{}': {}", tag, e)))?;
            revwalk.hide(tagged.id())?;
        }

        let mut commits = Vec::new();
        for oid in revwalk {
            let commit = repo.find_commit(oid?)?;
            commits.push(Self::to_record(&commit)?);
        }

        debug!(count = commits.len(), ?tag, "collected commits");
        Ok(commits)
    }

    fn create_tag(&self, name: &str, message: &str) -> Result<()> {
        let repo = self.open()?;
        let head = repo
            .head()
            .and_then(|head| head.peel(git2::ObjectType::Commit))
            .map_err(|e| ReleaseError::vcs(format!("Cannot resolve HEAD: {}", e)))?;
        let signature = self.signature(&repo)?;

        repo.tag(name, &head, &signature, message, false)
            .map_err(|e| ReleaseError::vcs(format!("Cannot create tag '{}': {}", name, e)))?;

        info!(tag = name, "created annotated tag");
        Ok(())
    }

    fn commit(&self, files: &[String], message: &str) -> Result<()> {
        let repo = self.open()?;
        let signature = self.signature(&repo)?;

        let tree_oid = self
            .stage(&repo, files)
            .map_err(|e| ReleaseError::vcs(format!("Cannot stage files: {}", e)))?;
        let tree = repo.find_tree(tree_oid)?;

        let parent = match Self::head_oid(&repo)? {
            Some(oid) => Some(repo.find_commit(oid)?),
            None => None,
        };

        if let Some(parent) = &parent {
            if parent.tree_id() == tree_oid {
                return Err(ReleaseError::vcs("nothing to commit"));
            }
        }

        let parents: Vec<&Commit<'_>> = parent.iter().collect();
        let oid = repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
            .map_err(|e| ReleaseError::vcs(format!("Commit failed: {}", e)))?;

        info!(commit = %oid, "committed release changes");
        Ok(())
    }
}
