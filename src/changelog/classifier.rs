use crate::changelog::ChangelogCategory;
use crate::domain::CommitRecord;
use regex::Regex;
use std::collections::BTreeMap;

/// Commit prefix: a word, an optional parenthesized scope, then a colon
const PREFIX_PATTERN: &str = r"(?i)^([a-z]+)(\(.*?\))?:";

/// Prefix rules, evaluated top to bottom. Order matters: first match wins.
const RULES: &[(&[&str], ChangelogCategory)] = &[
    (&["feat", "feature", "add"], ChangelogCategory::Added),
    (&["fix", "bug"], ChangelogCategory::Fixed),
    (&["change", "update", "refactor"], ChangelogCategory::Changed),
    (&["remove", "delete"], ChangelogCategory::Removed),
    (&["security", "sec"], ChangelogCategory::Security),
];

/// Commits grouped by changelog category.
///
/// Every category is always present, possibly empty. Within a category
/// commits keep the order they were classified in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorizedCommits {
    groups: BTreeMap<ChangelogCategory, Vec<CommitRecord>>,
}

impl CategorizedCommits {
    fn new() -> Self {
        CategorizedCommits {
            groups: ChangelogCategory::ALL
                .iter()
                .map(|category| (*category, Vec::new()))
                .collect(),
        }
    }

    /// Commits in a category
    pub fn get(&self, category: ChangelogCategory) -> &[CommitRecord] {
        self.groups
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Categories and their commits, in rendering order
    pub fn iter(&self) -> impl Iterator<Item = (ChangelogCategory, &[CommitRecord])> {
        self.groups
            .iter()
            .map(|(category, commits)| (*category, commits.as_slice()))
    }

    /// Total number of classified commits
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Determine the changelog category of a single commit message
pub fn category_for(message: &str) -> ChangelogCategory {
    let Some(prefix) = Regex::new(PREFIX_PATTERN)
        .ok()
        .and_then(|re| re.captures(message))
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_lowercase())
    else {
        return ChangelogCategory::Other;
    };

    RULES
        .iter()
        .find(|(keywords, _)| keywords.contains(&prefix.as_str()))
        .map(|(_, category)| *category)
        .unwrap_or(ChangelogCategory::Other)
}

/// Group commits by changelog category, preserving source order
pub fn classify(commits: &[CommitRecord]) -> CategorizedCommits {
    let mut categorized = CategorizedCommits::new();

    for commit in commits {
        categorized
            .groups
            .entry(category_for(&commit.message))
            .or_default()
            .push(commit.clone());
    }

    categorized
}
