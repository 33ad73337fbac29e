use crate::artifacts::ArtifactWriter;
use crate::error::{ReleaseError, Result};
use std::sync::Mutex;

/// Records artifact writes in memory instead of touching files
#[derive(Default)]
pub struct MockArtifactWriter {
    config_version: Mutex<Option<String>>,
    env_version: Mutex<Option<String>>,
    changelog_entries: Mutex<Vec<String>>,
    fail_on: Option<&'static str>,
}

impl MockArtifactWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the named operation: "config", "env" or "changelog"
    pub fn failing_on(mut self, target: &'static str) -> Self {
        self.fail_on = Some(target);
        self
    }

    pub fn config_version(&self) -> Option<String> {
        self.config_version.lock().ok().and_then(|v| v.clone())
    }

    pub fn env_version(&self) -> Option<String> {
        self.env_version.lock().ok().and_then(|v| v.clone())
    }

    /// Entries prepended so far, oldest first
    pub fn changelog_entries(&self) -> Vec<String> {
        self.changelog_entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    fn check(&self, target: &'static str) -> Result<()> {
        if self.fail_on == Some(target) {
            return Err(ReleaseError::artifact_write(target, "simulated failure"));
        }
        Ok(())
    }
}

impl ArtifactWriter for MockArtifactWriter {
    fn update_version_in_config(&self, version: &str) -> Result<()> {
        self.check("config")?;
        if let Ok(mut slot) = self.config_version.lock() {
            *slot = Some(version.to_string());
        }
        Ok(())
    }

    fn update_version_in_env(&self, version: &str) -> Result<()> {
        self.check("env")?;
        if let Ok(mut slot) = self.env_version.lock() {
            *slot = Some(version.to_string());
        }
        Ok(())
    }

    fn prepend_to_changelog(&self, entry: &str) -> Result<()> {
        self.check("changelog")?;
        if let Ok(mut entries) = self.changelog_entries.lock() {
            entries.push(entry.to_string());
        }
        Ok(())
    }
}
