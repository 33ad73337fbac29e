use crate::artifacts::ArtifactWriter;
use crate::changelog;
use crate::config::FilesConfig;
use crate::domain::{CommitRecord, ReleasePreparationRequest, SemanticVersion};
use crate::error::{ReleaseError, Result};
use crate::git::VersionControl;
use crate::release::VersionResolver;
use crate::warning::ReleaseWarning;
use chrono::{Local, NaiveDate};
use std::fmt;
use tracing::{debug, error, info, warn};

/// Steps of a release preparation, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseStage {
    Validating,
    ResolvingVersion,
    GeneratingChangelog,
    WritingArtifacts,
    Committing,
    Tagging,
    Done,
}

impl fmt::Display for ReleaseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReleaseStage::Validating => "validating",
            ReleaseStage::ResolvingVersion => "resolving version",
            ReleaseStage::GeneratingChangelog => "generating changelog",
            ReleaseStage::WritingArtifacts => "writing artifacts",
            ReleaseStage::Committing => "committing",
            ReleaseStage::Tagging => "tagging",
            ReleaseStage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Result of an optional version control step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Done,
    Skipped,
    Failed(String),
}

/// What happened to the changelog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangelogOutcome {
    Written { commits: usize },
    Skipped,
}

/// Everything a release would do, computed without side effects
#[derive(Debug, Clone, PartialEq)]
pub struct ReleasePlan {
    pub version: SemanticVersion,
    pub previous_tag: Option<String>,
    pub commits: Vec<CommitRecord>,
    /// Rendered changelog entry, `None` when there are no new commits
    pub changelog_entry: Option<String>,
}

/// Outcome of a completed release preparation
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseReport {
    pub version: SemanticVersion,
    pub changelog: ChangelogOutcome,
    pub commit: StepOutcome,
    pub tag: StepOutcome,
    pub warnings: Vec<ReleaseWarning>,
}

impl ReleaseReport {
    /// Tag name, i.e. the version with its `v` prefix
    pub fn tag_name(&self) -> String {
        self.version.to_string()
    }
}

/// Runs a release preparation against version control and the release artifacts.
///
/// The sequence is forward-only: once artifacts are written nothing is rolled
/// back. Commit and tag failures become warnings on the [ReleaseReport];
/// everything else aborts with an error. Concurrent runs against the same
/// repository are not guarded against.
pub struct ReleaseOrchestrator<'a, V: VersionControl, A: ArtifactWriter> {
    vcs: &'a V,
    artifacts: &'a A,
    files: Vec<String>,
    date: Option<NaiveDate>,
}

impl<'a, V: VersionControl, A: ArtifactWriter> ReleaseOrchestrator<'a, V, A> {
    pub fn new(vcs: &'a V, artifacts: &'a A, files: &FilesConfig) -> Self {
        ReleaseOrchestrator {
            vcs,
            artifacts,
            files: files.release_files(),
            date: None,
        }
    }

    /// Pin the changelog date instead of using today's local date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    fn release_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }

    fn enter(&self, stage: ReleaseStage) {
        debug!(%stage, "entering stage");
    }

    fn fail(&self, stage: ReleaseStage, err: ReleaseError) -> ReleaseError {
        error!(%stage, error = %err, "release preparation failed");
        err
    }

    /// Check that the working location is under version control.
    pub fn validate(&self) -> Result<()> {
        self.enter(ReleaseStage::Validating);
        if !self.vcs.is_repository() {
            return Err(self.fail(
                ReleaseStage::Validating,
                ReleaseError::NotARepository("no git metadata found".to_string()),
            ));
        }
        Ok(())
    }

    /// Resolve the version and render the changelog entry without changing anything.
    pub fn plan(&self, request: &ReleasePreparationRequest) -> Result<ReleasePlan> {
        self.validate()?;

        self.enter(ReleaseStage::ResolvingVersion);
        let version = VersionResolver::new(self.vcs)
            .resolve_next(request.version.as_deref(), request.kind)
            .map_err(|e| self.fail(ReleaseStage::ResolvingVersion, e))?;

        self.enter(ReleaseStage::GeneratingChangelog);
        let previous_tag = self
            .vcs
            .last_tag()
            .map_err(|e| self.fail(ReleaseStage::GeneratingChangelog, e))?;
        let commits = self
            .vcs
            .commits_since_tag(previous_tag.as_deref())
            .map_err(|e| self.fail(ReleaseStage::GeneratingChangelog, e))?;

        let changelog_entry = if commits.is_empty() {
            None
        } else {
            let categorized = changelog::classify(&commits);
            Some(changelog::render(&categorized, &version, self.release_date()))
        };

        Ok(ReleasePlan {
            version,
            previous_tag,
            commits,
            changelog_entry,
        })
    }

    /// Prepare the release: changelog, version bumps, commit and tag.
    pub fn prepare(&self, request: &ReleasePreparationRequest) -> Result<ReleaseReport> {
        let plan = self.plan(request)?;
        let version = plan.version;
        let mut warnings = Vec::new();

        let changelog = match &plan.changelog_entry {
            Some(entry) => {
                self.artifacts
                    .prepend_to_changelog(entry)
                    .map_err(|e| self.fail(ReleaseStage::GeneratingChangelog, e))?;
                info!(%version, commits = plan.commits.len(), "changelog updated");
                ChangelogOutcome::Written {
                    commits: plan.commits.len(),
                }
            }
            None => {
                warn!(previous_tag = ?plan.previous_tag, "no new commits, skipping changelog");
                warnings.push(ReleaseWarning::NoNewCommits {
                    since_tag: plan.previous_tag.clone(),
                });
                ChangelogOutcome::Skipped
            }
        };

        self.enter(ReleaseStage::WritingArtifacts);
        let stripped = version.stripped();
        self.artifacts
            .update_version_in_config(&stripped)
            .and_then(|_| self.artifacts.update_version_in_env(&stripped))
            .map_err(|e| self.fail(ReleaseStage::WritingArtifacts, e))?;

        let commit = if request.commit_changes {
            self.enter(ReleaseStage::Committing);
            let message = format!("chore: prepare release {}", version);
            match self.vcs.commit(&self.files, &message) {
                Ok(()) => StepOutcome::Done,
                Err(e) => {
                    warn!(error = %e, "release commit failed");
                    warnings.push(ReleaseWarning::CommitFailed {
                        reason: e.to_string(),
                        missing_identity: matches!(e, ReleaseError::MissingIdentity(_)),
                    });
                    StepOutcome::Failed(e.to_string())
                }
            }
        } else {
            StepOutcome::Skipped
        };

        let tag = if request.create_tag {
            self.enter(ReleaseStage::Tagging);
            let name = version.to_string();
            let message = format!("Release {}", version);
            match self.vcs.create_tag(&name, &message) {
                Ok(()) => StepOutcome::Done,
                Err(e) => {
                    warn!(tag = %name, error = %e, "release tag failed");
                    warnings.push(ReleaseWarning::TagFailed {
                        tag: name,
                        reason: e.to_string(),
                    });
                    StepOutcome::Failed(e.to_string())
                }
            }
        } else {
            StepOutcome::Skipped
        };

        self.enter(ReleaseStage::Done);
        info!(%version, "release prepared");

        Ok(ReleaseReport {
            version,
            changelog,
            commit,
            tag,
            warnings,
        })
    }
}
