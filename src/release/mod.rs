//! Release workflow: version resolution and the preparation sequence

pub mod orchestrator;
pub mod resolver;

pub use orchestrator::{
    ChangelogOutcome, ReleaseOrchestrator, ReleasePlan, ReleaseReport, ReleaseStage, StepOutcome,
};
pub use resolver::VersionResolver;
