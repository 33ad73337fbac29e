// tests/config_test.rs
use release_prep::config::{load_config, CONFIG_FILE_NAME};
use release_prep::{ReleaseError, ReleaseKind};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_config_from_repository_root() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        r#"
[files]
changelog = "docs/CHANGELOG.md"

[defaults]
type = "patch"
create_tag = false

[artifacts]
version_env_var = "RELEASE_VERSION"
"#,
    )
    .unwrap();

    let config = load_config(None, dir.path()).unwrap();
    assert_eq!(config.files.changelog, "docs/CHANGELOG.md");
    assert_eq!(config.files.env, ".env");
    assert_eq!(config.artifacts.version_env_var, "RELEASE_VERSION");
    assert_eq!(config.artifacts.name_env_var, "APP_NAME");

    let request = config.request(None, None, false, false).unwrap();
    assert_eq!(request.kind, ReleaseKind::Patch);
    assert!(!request.create_tag);
    assert!(request.commit_changes);
}

#[test]
fn test_load_config_from_explicit_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[defaults]\ntype = \"major\"\n").unwrap();

    let config = load_config(Some(&path), dir.path()).unwrap();
    assert_eq!(config.defaults.release_type, "major");
}

#[test]
fn test_load_config_missing_explicit_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");

    assert!(matches!(
        load_config(Some(&path), dir.path()),
        Err(ReleaseError::Io(_))
    ));
}

#[test]
fn test_load_config_invalid_toml() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "[files\nchangelog =").unwrap();

    assert!(matches!(
        load_config(None, dir.path()),
        Err(ReleaseError::Config(_))
    ));
}

#[test]
fn test_cli_type_overrides_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "[defaults]\ntype = \"patch\"\n").unwrap();

    let config = load_config(None, dir.path()).unwrap();
    let request = config.request(None, Some("major"), false, true).unwrap();
    assert_eq!(request.kind, ReleaseKind::Major);
    assert!(!request.commit_changes);

    assert!(matches!(
        config.request(None, Some("Major"), false, false),
        Err(ReleaseError::InvalidReleaseKind(_))
    ));
}
