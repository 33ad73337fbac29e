use crate::domain::{ReleaseKind, SemanticVersion};
use crate::error::Result;
use crate::git::VersionControl;
use tracing::debug;

/// Computes the version of the next release
pub struct VersionResolver<'a, V: VersionControl> {
    vcs: &'a V,
}

impl<'a, V: VersionControl> VersionResolver<'a, V> {
    pub fn new(vcs: &'a V) -> Self {
        VersionResolver { vcs }
    }

    /// Resolve the next version.
    ///
    /// An explicit version is parsed and returned as is, without asking
    /// version control. Otherwise the last tag is bumped by `kind`, or
    /// [SemanticVersion::initial] is used when nothing has been tagged. A last
    /// tag that is not a valid version is an error.
    pub fn resolve_next(&self, explicit: Option<&str>, kind: ReleaseKind) -> Result<SemanticVersion> {
        if let Some(explicit) = explicit {
            let version = SemanticVersion::parse(explicit)?;
            debug!(%version, "using explicit version");
            return Ok(version);
        }

        let Some(tag) = self.vcs.last_tag()? else {
            debug!("no previous tag, starting at initial version");
            return Ok(SemanticVersion::initial());
        };

        let next = SemanticVersion::parse(&tag)?.increment(kind);
        debug!(last_tag = %tag, %kind, %next, "bumped last tag");
        Ok(next)
    }
}
