use crate::domain::{ReleaseKind, ReleasePreparationRequest};
use crate::error::{ReleaseError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name looked up in the repository root and the user config directory
pub const CONFIG_FILE_NAME: &str = "release-prep.toml";

/// Represents the complete configuration for release-prep.
///
/// Contains the artifact file locations, request defaults and the variable
/// names used inside the config and env artifacts.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub files: FilesConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub artifacts: ArtifactsConfig,

    #[serde(default)]
    pub git: GitConfig,
}

fn default_changelog_path() -> String {
    "CHANGELOG.md".to_string()
}

fn default_config_path() -> String {
    "config/app.php".to_string()
}

fn default_env_path() -> String {
    ".env".to_string()
}

/// Locations of the release artifacts, relative to the repository root.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FilesConfig {
    #[serde(default = "default_changelog_path")]
    pub changelog: String,

    #[serde(default = "default_config_path")]
    pub config: String,

    #[serde(default = "default_env_path")]
    pub env: String,
}

impl FilesConfig {
    /// Files staged by the release commit
    pub fn release_files(&self) -> Vec<String> {
        vec![self.changelog.clone(), self.config.clone(), self.env.clone()]
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        FilesConfig {
            changelog: default_changelog_path(),
            config: default_config_path(),
            env: default_env_path(),
        }
    }
}

fn default_release_type() -> String {
    ReleaseKind::Minor.to_string()
}

fn default_true() -> bool {
    true
}

/// Defaults applied when the command line does not say otherwise.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DefaultsConfig {
    #[serde(rename = "type", default = "default_release_type")]
    pub release_type: String,

    #[serde(default = "default_true")]
    pub create_tag: bool,

    #[serde(default = "default_true")]
    pub commit_changes: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        DefaultsConfig {
            release_type: default_release_type(),
            create_tag: true,
            commit_changes: true,
        }
    }
}

fn default_version_env_var() -> String {
    "APP_VERSION".to_string()
}

fn default_name_env_var() -> String {
    "APP_NAME".to_string()
}

/// Variable names used inside the config and env artifacts.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ArtifactsConfig {
    #[serde(default = "default_version_env_var")]
    pub version_env_var: String,

    #[serde(default = "default_name_env_var")]
    pub name_env_var: String,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        ArtifactsConfig {
            version_env_var: default_version_env_var(),
            name_env_var: default_name_env_var(),
        }
    }
}

/// Commit identity used when git itself has no `user.name`/`user.email`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct GitConfig {
    #[serde(default)]
    pub user_name: Option<String>,

    #[serde(default)]
    pub user_email: Option<String>,
}

impl GitConfig {
    /// Name and email, only when both are set and non-empty
    pub fn identity(&self) -> Option<(&str, &str)> {
        match (self.user_name.as_deref(), self.user_email.as_deref()) {
            (Some(name), Some(email)) if !name.is_empty() && !email.is_empty() => {
                Some((name, email))
            }
            _ => None,
        }
    }
}

impl Config {
    /// Build a request from the configured defaults.
    ///
    /// `release_type` overrides `defaults.type`; the flags are only ever
    /// switched off from the command line.
    pub fn request(
        &self,
        version: Option<String>,
        release_type: Option<&str>,
        no_tag: bool,
        no_commit: bool,
    ) -> Result<ReleasePreparationRequest> {
        let kind: ReleaseKind = release_type
            .unwrap_or(self.defaults.release_type.as_str())
            .parse()?;

        Ok(ReleasePreparationRequest::new(version, kind)
            .with_tag(self.defaults.create_tag && !no_tag)
            .with_commit(self.defaults.commit_changes && !no_commit))
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release-prep.toml` in the repository root
/// 3. `release-prep.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, root: &Path) -> Result<Config> {
    let candidate = if let Some(path) = config_path {
        Some(path.to_path_buf())
    } else if root.join(CONFIG_FILE_NAME).exists() {
        Some(root.join(CONFIG_FILE_NAME))
    } else {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    };

    let Some(path) = candidate else {
        return Ok(Config::default());
    };

    let content = fs::read_to_string(&path)?;
    toml::from_str(&content)
        .map_err(|e| ReleaseError::config(format!("{}: {}", path.display(), e)))
}
