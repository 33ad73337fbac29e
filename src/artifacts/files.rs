use crate::artifacts::ArtifactWriter;
use crate::config::Config;
use crate::error::{ReleaseError, Result};
use regex::{Captures, NoExpand, Regex};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Header written when the changelog does not exist yet
pub const CHANGELOG_PREAMBLE: &str = "# Changelog\n\n\
All notable changes to this project will be documented in this file.\n\n\
The format is based on [Keep a Changelog](https://keepachangelog.com/en/1.0.0/),\n\
and this project adheres to [Semantic Versioning](https://semver.org/spec/v2.0.0.html).\n\n";

/// [ArtifactWriter] that edits the changelog, config and env files on disk
#[derive(Debug, Clone)]
pub struct FileArtifactWriter {
    config_path: PathBuf,
    env_path: PathBuf,
    changelog_path: PathBuf,
    version_env_var: String,
    name_env_var: String,
}

impl FileArtifactWriter {
    pub fn new(
        config_path: impl Into<PathBuf>,
        env_path: impl Into<PathBuf>,
        changelog_path: impl Into<PathBuf>,
    ) -> Self {
        FileArtifactWriter {
            config_path: config_path.into(),
            env_path: env_path.into(),
            changelog_path: changelog_path.into(),
            version_env_var: "APP_VERSION".to_string(),
            name_env_var: "APP_NAME".to_string(),
        }
    }

    /// Resolve the configured file paths against the repository root
    pub fn from_config(root: &Path, config: &Config) -> Self {
        FileArtifactWriter {
            config_path: root.join(&config.files.config),
            env_path: root.join(&config.files.env),
            changelog_path: root.join(&config.files.changelog),
            version_env_var: config.artifacts.version_env_var.clone(),
            name_env_var: config.artifacts.name_env_var.clone(),
        }
    }

    /// Use different variable names for the version and application name
    pub fn with_env_vars(mut self, version_var: impl Into<String>, name_var: impl Into<String>) -> Self {
        self.version_env_var = version_var.into();
        self.name_env_var = name_var.into();
        self
    }

    fn read(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ReleaseError::artifact_write(
                path.display().to_string(),
                "file not found",
            ));
        }
        fs::read_to_string(path)
            .map_err(|e| ReleaseError::artifact_write(path.display().to_string(), e.to_string()))
    }

    fn write(path: &Path, content: &str) -> Result<()> {
        fs::write(path, content)
            .map_err(|e| ReleaseError::artifact_write(path.display().to_string(), e.to_string()))
    }
}

impl ArtifactWriter for FileArtifactWriter {
    fn update_version_in_config(&self, version: &str) -> Result<()> {
        let version = strip_version_prefix(version);
        let content = Self::read(&self.config_path)?;

        let updated = rewrite_config_version(
            &content,
            version,
            &self.version_env_var,
            &self.name_env_var,
        )
        .ok_or_else(|| {
            ReleaseError::artifact_write(
                self.config_path.display().to_string(),
                format!(
                    "no '{}' or '{}' entry to anchor the version",
                    self.version_env_var, self.name_env_var
                ),
            )
        })?;

        Self::write(&self.config_path, &updated)?;
        info!(path = %self.config_path.display(), version, "updated config version");
        Ok(())
    }

    fn update_version_in_env(&self, version: &str) -> Result<()> {
        let version = strip_version_prefix(version);
        let content = Self::read(&self.env_path)?;
        let updated = rewrite_env_version(&content, version, &self.version_env_var);

        Self::write(&self.env_path, &updated)?;
        info!(path = %self.env_path.display(), version, "updated env version");
        Ok(())
    }

    fn prepend_to_changelog(&self, entry: &str) -> Result<()> {
        let existing = if self.changelog_path.exists() {
            Self::read(&self.changelog_path)?
        } else {
            debug!(path = %self.changelog_path.display(), "creating changelog");
            if let Some(parent) = self.changelog_path.parent() {
                fs::create_dir_all(parent).map_err(|e| {
                    ReleaseError::artifact_write(
                        self.changelog_path.display().to_string(),
                        e.to_string(),
                    )
                })?;
            }
            CHANGELOG_PREAMBLE.to_string()
        };

        Self::write(&self.changelog_path, &insert_changelog_entry(&existing, entry))?;
        info!(path = %self.changelog_path.display(), "prepended changelog entry");
        Ok(())
    }
}

/// Drop a single leading `v` or `V`
pub fn strip_version_prefix(version: &str) -> &str {
    version
        .strip_prefix('v')
        .or_else(|| version.strip_prefix('V'))
        .unwrap_or(version)
}

/// Set `'version' => env('<VAR>', '<version>')` in a config file.
///
/// An existing entry is rewritten in place; otherwise the entry is inserted
/// after the application name line. Returns `None` when neither is present.
pub fn rewrite_config_version(
    content: &str,
    version: &str,
    version_var: &str,
    name_var: &str,
) -> Option<String> {
    let entry = format!("'version' => env('{}', '{}')", version_var, version);

    let existing = Regex::new(&format!(
        r"'version'\s*=>\s*env\('{}',\s*'[^']*'\)",
        regex::escape(version_var)
    ))
    .ok()?;
    if existing.is_match(content) {
        return Some(existing.replace_all(content, NoExpand(&entry)).into_owned());
    }

    let anchor = Regex::new(&format!(
        r"('name'\s*=>\s*env\('{}',\s*'[^']*'\),)",
        regex::escape(name_var)
    ))
    .ok()?;
    if anchor.is_match(content) {
        return Some(
            anchor
                .replace(content, |caps: &Captures| {
                    format!("{}\n    {},", &caps[1], entry)
                })
                .into_owned(),
        );
    }

    None
}

/// Set `<VAR>=<version>` in an env file, appending the line if missing
pub fn rewrite_env_version(content: &str, version: &str, var: &str) -> String {
    let line = format!("{}={}", var, version);

    match Regex::new(&format!(r"(?m)^{}=.*$", regex::escape(var))) {
        Ok(re) if re.is_match(content) => re.replace_all(content, NoExpand(&line)).into_owned(),
        _ => format!("{}\n{}\n", content, line),
    }
}

/// Place a changelog entry before the first release heading.
///
/// Documents without any `## ` heading get the entry appended after a blank line.
pub fn insert_changelog_entry(existing: &str, entry: &str) -> String {
    let first_heading = Regex::new(r"(?m)^## ")
        .ok()
        .and_then(|re| re.find(existing))
        .map(|m| m.start());

    match first_heading {
        Some(index) => format!("{}{}{}", &existing[..index], entry, &existing[index..]),
        None => format!("{}\n{}", existing, entry),
    }
}
