// tests/orchestrator_test.rs
use chrono::NaiveDate;
use release_prep::artifacts::MockArtifactWriter;
use release_prep::config::FilesConfig;
use release_prep::git::{MockRepository, VcsCall};
use release_prep::release::{ChangelogOutcome, ReleaseOrchestrator, StepOutcome};
use release_prep::warning::ReleaseWarning;
use release_prep::{CommitRecord, ReleaseError, ReleaseKind, ReleasePreparationRequest, SemanticVersion};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

fn commit(message: &str, hash: &str) -> CommitRecord {
    CommitRecord::new(message, hash, "Test Author", date())
}

fn release_files() -> Vec<String> {
    vec![
        "CHANGELOG.md".to_string(),
        "config/app.php".to_string(),
        ".env".to_string(),
    ]
}

fn has_mutation(calls: &[VcsCall]) -> bool {
    calls
        .iter()
        .any(|call| matches!(call, VcsCall::Commit { .. } | VcsCall::CreateTag { .. }))
}

#[test]
fn test_full_release_sequence() {
    let repo = MockRepository::new()
        .with_last_tag("v1.4.2")
        .with_commits(vec![
            commit("fix: crash on empty input", "f00d"),
            commit("feat(api): pagination", "beef"),
        ]);
    let writer = MockArtifactWriter::new();
    let orchestrator =
        ReleaseOrchestrator::new(&repo, &writer, &FilesConfig::default()).with_date(date());

    let report = orchestrator
        .prepare(&ReleasePreparationRequest::new(None, ReleaseKind::Minor))
        .unwrap();

    assert_eq!(report.version, SemanticVersion::new(1, 5, 0));
    assert_eq!(report.changelog, ChangelogOutcome::Written { commits: 2 });
    assert_eq!(report.commit, StepOutcome::Done);
    assert_eq!(report.tag, StepOutcome::Done);
    assert!(report.warnings.is_empty());

    assert_eq!(
        writer.changelog_entries(),
        vec![
            "## [1.5.0] - 2024-01-15\n\n\
             ### Added\n\n- feat(api): pagination ([beef])\n\n\
             ### Fixed\n\n- fix: crash on empty input ([f00d])\n\n"
                .to_string()
        ]
    );
    assert_eq!(writer.config_version().as_deref(), Some("1.5.0"));
    assert_eq!(writer.env_version().as_deref(), Some("1.5.0"));

    assert_eq!(
        repo.calls(),
        vec![
            VcsCall::IsRepository,
            VcsCall::LastTag,
            VcsCall::LastTag,
            VcsCall::CommitsSinceTag(Some("v1.4.2".to_string())),
            VcsCall::Commit {
                files: release_files(),
                message: "chore: prepare release v1.5.0".to_string(),
            },
            VcsCall::CreateTag {
                name: "v1.5.0".to_string(),
                message: "Release v1.5.0".to_string(),
            },
        ]
    );
}

#[test]
fn test_first_release_reads_full_history() {
    let repo = MockRepository::new().with_commits(vec![commit("Initial commit", "0001")]);
    let writer = MockArtifactWriter::new();
    let orchestrator =
        ReleaseOrchestrator::new(&repo, &writer, &FilesConfig::default()).with_date(date());

    let report = orchestrator
        .prepare(&ReleasePreparationRequest::default())
        .unwrap();

    assert_eq!(report.version, SemanticVersion::initial());
    assert!(repo.calls().contains(&VcsCall::CommitsSinceTag(None)));
    assert_eq!(
        writer.changelog_entries(),
        vec!["## [1.0.0] - 2024-01-15\n\n### Other\n\n- Initial commit ([0001])\n\n".to_string()]
    );
}

#[test]
fn test_not_a_repository_has_no_side_effects() {
    let repo = MockRepository::not_a_repository();
    let writer = MockArtifactWriter::new();
    let orchestrator = ReleaseOrchestrator::new(&repo, &writer, &FilesConfig::default());

    let err = orchestrator
        .prepare(&ReleasePreparationRequest::default())
        .unwrap_err();

    assert!(matches!(err, ReleaseError::NotARepository(_)));
    assert_eq!(repo.calls(), vec![VcsCall::IsRepository]);
    assert!(writer.changelog_entries().is_empty());
    assert_eq!(writer.config_version(), None);
}

#[test]
fn test_invalid_explicit_version_has_no_side_effects() {
    let repo = MockRepository::new().with_commits(vec![commit("feat: x", "a1")]);
    let writer = MockArtifactWriter::new();
    let orchestrator = ReleaseOrchestrator::new(&repo, &writer, &FilesConfig::default());

    let err = orchestrator
        .prepare(&ReleasePreparationRequest::new(
            Some("1.0.0-beta".to_string()),
            ReleaseKind::Minor,
        ))
        .unwrap_err();

    assert!(matches!(err, ReleaseError::InvalidFormat(_)));
    assert!(!has_mutation(&repo.calls()));
    assert!(writer.changelog_entries().is_empty());
    assert_eq!(writer.env_version(), None);
}

#[test]
fn test_unparseable_last_tag_aborts() {
    let repo = MockRepository::new().with_last_tag("nightly");
    let writer = MockArtifactWriter::new();
    let orchestrator = ReleaseOrchestrator::new(&repo, &writer, &FilesConfig::default());

    let err = orchestrator
        .prepare(&ReleasePreparationRequest::default())
        .unwrap_err();

    assert!(matches!(err, ReleaseError::InvalidFormat(_)));
    assert!(err.is_validation());
    assert!(!has_mutation(&repo.calls()));
    assert_eq!(writer.config_version(), None);
}

#[test]
fn test_explicit_version_wins_over_tag() {
    let repo = MockRepository::new().with_last_tag("v1.0.0");
    let writer = MockArtifactWriter::new();
    let orchestrator = ReleaseOrchestrator::new(&repo, &writer, &FilesConfig::default());

    let report = orchestrator
        .prepare(&ReleasePreparationRequest::new(
            Some("v3.1.4".to_string()),
            ReleaseKind::Major,
        ))
        .unwrap();

    assert_eq!(report.version, SemanticVersion::new(3, 1, 4));
    assert_eq!(writer.config_version().as_deref(), Some("3.1.4"));
}

#[test]
fn test_no_new_commits_skips_changelog() {
    let repo = MockRepository::new().with_last_tag("v2.0.0");
    let writer = MockArtifactWriter::new();
    let orchestrator = ReleaseOrchestrator::new(&repo, &writer, &FilesConfig::default());

    let report = orchestrator
        .prepare(&ReleasePreparationRequest::new(None, ReleaseKind::Patch))
        .unwrap();

    assert_eq!(report.version, SemanticVersion::new(2, 0, 1));
    assert_eq!(report.changelog, ChangelogOutcome::Skipped);
    assert!(writer.changelog_entries().is_empty());
    assert_eq!(writer.env_version().as_deref(), Some("2.0.1"));
    assert_eq!(
        report.warnings,
        vec![ReleaseWarning::NoNewCommits {
            since_tag: Some("v2.0.0".to_string())
        }]
    );
}

#[test]
fn test_artifact_failure_is_fatal() {
    let repo = MockRepository::new().with_commits(vec![commit("feat: x", "a1")]);
    let writer = MockArtifactWriter::new().failing_on("env");
    let orchestrator = ReleaseOrchestrator::new(&repo, &writer, &FilesConfig::default());

    let err = orchestrator
        .prepare(&ReleasePreparationRequest::default())
        .unwrap_err();

    assert!(matches!(err, ReleaseError::ArtifactWrite { .. }));
    // Earlier steps are not rolled back
    assert_eq!(writer.changelog_entries().len(), 1);
    assert_eq!(writer.config_version().as_deref(), Some("1.0.0"));
    assert!(!has_mutation(&repo.calls()));
}

#[test]
fn test_changelog_failure_is_fatal() {
    let repo = MockRepository::new().with_commits(vec![commit("feat: x", "a1")]);
    let writer = MockArtifactWriter::new().failing_on("changelog");
    let orchestrator = ReleaseOrchestrator::new(&repo, &writer, &FilesConfig::default());

    let err = orchestrator
        .prepare(&ReleasePreparationRequest::default())
        .unwrap_err();

    assert!(matches!(err, ReleaseError::ArtifactWrite { .. }));
    assert_eq!(writer.config_version(), None);
}

#[test]
fn test_commit_and_tag_failures_are_warnings() {
    let repo = MockRepository::new()
        .with_last_tag("v1.0.0")
        .with_commits(vec![commit("fix: y", "b2")])
        .failing_commit("nothing to commit")
        .failing_tag("tag 'v1.0.1' already exists");
    let writer = MockArtifactWriter::new();
    let orchestrator = ReleaseOrchestrator::new(&repo, &writer, &FilesConfig::default());

    let report = orchestrator
        .prepare(&ReleasePreparationRequest::new(None, ReleaseKind::Patch))
        .unwrap();

    assert_eq!(report.version, SemanticVersion::new(1, 0, 1));
    assert!(matches!(report.commit, StepOutcome::Failed(_)));
    assert!(matches!(report.tag, StepOutcome::Failed(_)));
    assert_eq!(report.warnings.len(), 2);
    assert!(matches!(report.warnings[0], ReleaseWarning::CommitFailed { .. }));
    assert!(matches!(
        &report.warnings[1],
        ReleaseWarning::TagFailed { tag, .. } if tag == "v1.0.1"
    ));
    // Tagging is still attempted after a failed commit
    assert!(repo
        .calls()
        .iter()
        .any(|call| matches!(call, VcsCall::CreateTag { .. })));
}

#[test]
fn test_flags_skip_commit_and_tag() {
    let repo = MockRepository::new().with_commits(vec![commit("feat: x", "a1")]);
    let writer = MockArtifactWriter::new();
    let orchestrator = ReleaseOrchestrator::new(&repo, &writer, &FilesConfig::default());

    let request = ReleasePreparationRequest::default()
        .with_commit(false)
        .with_tag(false);
    let report = orchestrator.prepare(&request).unwrap();

    assert_eq!(report.commit, StepOutcome::Skipped);
    assert_eq!(report.tag, StepOutcome::Skipped);
    assert!(!has_mutation(&repo.calls()));
    assert_eq!(writer.config_version().as_deref(), Some("1.0.0"));
}

#[test]
fn test_custom_files_are_committed() {
    let files = FilesConfig {
        changelog: "docs/HISTORY.md".to_string(),
        config: "app.toml".to_string(),
        env: ".env.production".to_string(),
    };
    let repo = MockRepository::new();
    let writer = MockArtifactWriter::new();
    let orchestrator = ReleaseOrchestrator::new(&repo, &writer, &files);

    orchestrator
        .prepare(&ReleasePreparationRequest::default().with_tag(false))
        .unwrap();

    assert!(repo.calls().contains(&VcsCall::Commit {
        files: vec![
            "docs/HISTORY.md".to_string(),
            "app.toml".to_string(),
            ".env.production".to_string(),
        ],
        message: "chore: prepare release v1.0.0".to_string(),
    }));
}

#[test]
fn test_missing_identity_warning_carries_guidance() {
    let repo = MockRepository::new()
        .with_commits(vec![commit("feat: x", "a1")])
        .without_identity();
    let writer = MockArtifactWriter::new();
    let orchestrator = ReleaseOrchestrator::new(&repo, &writer, &FilesConfig::default());

    let report = orchestrator
        .prepare(&ReleasePreparationRequest::default())
        .unwrap();

    assert_eq!(
        report.warnings[0],
        ReleaseWarning::CommitFailed {
            reason: "Git user not configured: config value 'user.name' was not found"
                .to_string(),
            missing_identity: true,
        }
    );
    assert!(report.warnings[0]
        .to_string()
        .contains("git config user.email"));
    assert!(matches!(report.tag, StepOutcome::Failed(_)));
}

#[test]
fn test_ordinary_commit_failure_has_no_guidance() {
    let repo = MockRepository::new().failing_commit("nothing to commit");
    let writer = MockArtifactWriter::new();
    let orchestrator = ReleaseOrchestrator::new(&repo, &writer, &FilesConfig::default());

    let report = orchestrator
        .prepare(&ReleasePreparationRequest::default().with_tag(false))
        .unwrap();

    assert!(matches!(
        report.warnings.last(),
        Some(ReleaseWarning::CommitFailed {
            missing_identity: false,
            ..
        })
    ));
}
