//! Changelog generation: commit classification and Markdown rendering
//!
//! [classify] sorts commits into the fixed Keep a Changelog sections and
//! [render] turns the result into a self-contained release entry. Inserting
//! the entry into an existing document is the artifact writer's job.

pub mod classifier;
pub mod renderer;

pub use classifier::{classify, CategorizedCommits};
pub use renderer::render;

use std::fmt;

/// Changelog section, declared in rendering order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChangelogCategory {
    Added,
    Changed,
    Fixed,
    Removed,
    Security,
    Other,
}

impl ChangelogCategory {
    /// All categories in rendering order
    pub const ALL: [ChangelogCategory; 6] = [
        ChangelogCategory::Added,
        ChangelogCategory::Changed,
        ChangelogCategory::Fixed,
        ChangelogCategory::Removed,
        ChangelogCategory::Security,
        ChangelogCategory::Other,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ChangelogCategory::Added => "Added",
            ChangelogCategory::Changed => "Changed",
            ChangelogCategory::Fixed => "Fixed",
            ChangelogCategory::Removed => "Removed",
            ChangelogCategory::Security => "Security",
            ChangelogCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ChangelogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
