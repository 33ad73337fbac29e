use crate::changelog::CategorizedCommits;
use crate::domain::SemanticVersion;
use chrono::NaiveDate;

/// Render a Markdown changelog entry for one release.
///
/// Empty categories are left out. The result ends with a blank line so that
/// entries can be stacked directly on top of each other.
pub fn render(categorized: &CategorizedCommits, version: &SemanticVersion, date: NaiveDate) -> String {
    let mut entry = format!(
        "## [{}] - {}\n\n",
        version.stripped(),
        date.format("%Y-%m-%d")
    );

    for (category, commits) in categorized.iter() {
        if commits.is_empty() {
            continue;
        }

        entry.push_str(&format!("### {}\n\n", category));
        for commit in commits {
            entry.push_str(&format!("- {} ([{}])\n", commit.message, commit.short_hash));
        }
        entry.push('\n');
    }

    entry
}
