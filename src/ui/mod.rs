//! User interface module - terminal output for the command line tool.
//!
//! `formatter` builds the text; the functions here print it. Status lines go
//! to stdout, warnings and errors to stderr.

pub mod formatter;

use crate::release::{ReleasePlan, ReleaseReport};
use crate::warning::ReleaseWarning;

pub fn display_error(message: &str) {
    eprintln!("{}", formatter::format_error(message));
}

pub fn display_success(message: &str) {
    println!("{}", formatter::format_success(message));
}

pub fn display_status(message: &str) {
    println!("{}", formatter::format_status(message));
}

pub fn display_warning(warning: &ReleaseWarning) {
    eprintln!("{}", formatter::format_warning(&warning.to_string()));
}

/// Show the version and changelog entry a dry run would produce
pub fn display_plan(plan: &ReleasePlan) {
    println!("\n{}", formatter::format_plan(plan));
}

/// Show the release summary, its warnings and the publishing commands
pub fn display_report(report: &ReleaseReport, changelog_path: &str, branch: &str) {
    println!("\n{}\n", formatter::format_report(report));

    for warning in &report.warnings {
        display_warning(warning);
    }

    println!("{}", formatter::format_next_steps(report, changelog_path, branch));
}
