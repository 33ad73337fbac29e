//! Pure formatting functions for UI output.
//!
//! Everything here builds strings; printing happens in the parent module.

use crate::domain::CommitRecord;
use crate::release::{ChangelogOutcome, ReleasePlan, ReleaseReport, StepOutcome};
use console::style;

pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().bold(), message)
}

pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

pub fn format_warning(message: &str) -> String {
    format!("{} {}", style("⚠ WARNING:").yellow(), message)
}

/// List up to 10 commits, newest first, with a count of the rest
pub fn format_commits(commits: &[CommitRecord]) -> String {
    let mut out = format!("{}\n", style(format!("{} commits:", commits.len())).underlined());

    for commit in commits.iter().take(10) {
        let short_msg: String = commit.message.chars().take(60).collect();
        out.push_str(&format!(
            "  {} {}\n",
            style(&commit.short_hash).dim(),
            short_msg
        ));
    }

    if commits.len() > 10 {
        out.push_str(&format!("  ... and {} more commits\n", commits.len() - 10));
    }

    out
}

/// Describe what a dry run would do
pub fn format_plan(plan: &ReleasePlan) -> String {
    let mut out = String::new();

    match &plan.previous_tag {
        Some(tag) => out.push_str(&format!(
            "{}\n  From: {}\n  To:   {}\n",
            style("Proposed Release:").bold(),
            style(tag).red(),
            style(plan.version).green()
        )),
        None => out.push_str(&format!(
            "{}\n  New version: {}\n",
            style("Initial Release:").bold(),
            style(plan.version).green()
        )),
    }

    match &plan.changelog_entry {
        Some(entry) => {
            out.push('\n');
            out.push_str(&format_commits(&plan.commits));
            out.push_str(&format!("\n{}\n{}", style("Changelog entry:").bold(), entry));
        }
        None => out.push_str("\nNo new commits; the changelog would be left unchanged.\n"),
    }

    out
}

fn format_step(name: &str, outcome: &StepOutcome) -> String {
    match outcome {
        StepOutcome::Done => format!("  {} {}", style("✓").green(), name),
        StepOutcome::Skipped => format!("  {} {} (skipped)", style("-").dim(), name),
        StepOutcome::Failed(reason) => format!("  {} {}: {}", style("✗").red(), name, reason),
    }
}

/// Summarize a finished release preparation
pub fn format_report(report: &ReleaseReport) -> String {
    let changelog = match report.changelog {
        ChangelogOutcome::Written { commits } => {
            format!("  {} changelog ({} commits)", style("✓").green(), commits)
        }
        ChangelogOutcome::Skipped => format!("  {} changelog (no new commits)", style("-").dim()),
    };

    [
        format!("{} {}", style("Release").bold(), style(report.version).green().bold()),
        changelog,
        format!("  {} config and env version", style("✓").green()),
        format_step("commit", &report.commit),
        format_step(&format!("tag {}", report.tag_name()), &report.tag),
    ]
    .join("\n")
}

/// Commands to publish the prepared release
pub fn format_next_steps(report: &ReleaseReport, changelog_path: &str, branch: &str) -> String {
    format!(
        "Next steps:\n  1. Review {}\n  2. {}\n  3. {}",
        changelog_path,
        style(format!("git push origin {}", branch)).cyan(),
        style(format!("git push origin {}", report.tag_name())).cyan()
    )
}
