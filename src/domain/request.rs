use crate::domain::ReleaseKind;

/// Input for a single release preparation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePreparationRequest {
    /// Version to release; computed from the last tag when `None`
    pub version: Option<String>,
    pub kind: ReleaseKind,
    pub create_tag: bool,
    pub commit_changes: bool,
}

impl ReleasePreparationRequest {
    pub fn new(version: Option<String>, kind: ReleaseKind) -> Self {
        ReleasePreparationRequest {
            version,
            kind,
            ..Default::default()
        }
    }

    pub fn with_tag(mut self, create_tag: bool) -> Self {
        self.create_tag = create_tag;
        self
    }

    pub fn with_commit(mut self, commit_changes: bool) -> Self {
        self.commit_changes = commit_changes;
        self
    }
}

impl Default for ReleasePreparationRequest {
    fn default() -> Self {
        ReleasePreparationRequest {
            version: None,
            kind: ReleaseKind::Minor,
            create_tag: true,
            commit_changes: true,
        }
    }
}
