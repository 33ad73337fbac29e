pub mod artifacts;
pub mod changelog;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod logging;
pub mod release;
pub mod ui;
pub mod warning;

pub use domain::{CommitRecord, ReleaseKind, ReleasePreparationRequest, SemanticVersion};
pub use error::{ReleaseError, Result};
pub use release::{ReleaseOrchestrator, ReleaseReport, VersionResolver};
