//! Domain logic - pure release rules independent of git and the filesystem

pub mod commit;
pub mod request;
pub mod version;

pub use commit::CommitRecord;
pub use request::ReleasePreparationRequest;
pub use version::{ReleaseKind, SemanticVersion};
