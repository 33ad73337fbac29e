use crate::error::{ReleaseError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;

const VERSION_PATTERN: &str = r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)$";

/// Semantic version representation (`MAJOR.MINOR.PATCH`, no pre-release or build metadata)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl SemanticVersion {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
        }
    }

    /// Version used when the repository has no release tag yet
    pub fn initial() -> Self {
        SemanticVersion::new(1, 0, 0)
    }

    /// Parse a version string such as "v1.2.3", "V1.2.3" or "1.2.3".
    ///
    /// The text after the optional prefix must match exactly: no whitespace,
    /// no suffixes, three components and no leading zeros.
    pub fn parse(text: &str) -> Result<Self> {
        let clean = text
            .strip_prefix('v')
            .or_else(|| text.strip_prefix('V'))
            .unwrap_or(text);

        let captures = Regex::new(VERSION_PATTERN)
            .ok()
            .and_then(|re| re.captures(clean))
            .ok_or_else(|| ReleaseError::invalid_format(text))?;

        let component = |index: usize| -> Result<u64> {
            captures
                .get(index)
                .and_then(|m| m.as_str().parse::<u64>().ok())
                .ok_or_else(|| ReleaseError::invalid_format(text))
        };

        Ok(SemanticVersion {
            major: component(1)?,
            minor: component(2)?,
            patch: component(3)?,
        })
    }

    /// Version without the `v` prefix, as written into config and env files
    pub fn stripped(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    pub fn equals(&self, other: &SemanticVersion) -> bool {
        self == other
    }

    /// Strict comparison on (major, minor, patch)
    pub fn is_greater_than(&self, other: &SemanticVersion) -> bool {
        self > other
    }

    /// Return the next version for the given release kind
    pub fn increment(&self, kind: ReleaseKind) -> Self {
        match kind {
            ReleaseKind::Major => SemanticVersion::new(self.major + 1, 0, 0),
            ReleaseKind::Minor => SemanticVersion::new(self.major, self.minor + 1, 0),
            ReleaseKind::Patch => SemanticVersion::new(self.major, self.minor, self.patch + 1),
        }
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SemanticVersion {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        SemanticVersion::parse(s)
    }
}

/// Which component of the version a release bumps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReleaseKind {
    Major,
    #[default]
    Minor,
    Patch,
}

impl ReleaseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseKind::Major => "major",
            ReleaseKind::Minor => "minor",
            ReleaseKind::Patch => "patch",
        }
    }
}

impl FromStr for ReleaseKind {
    type Err = ReleaseError;

    /// Only the lowercase names are accepted.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(ReleaseKind::Major),
            "minor" => Ok(ReleaseKind::Minor),
            "patch" => Ok(ReleaseKind::Patch),
            other => Err(ReleaseError::invalid_release_kind(other)),
        }
    }
}

impl fmt::Display for ReleaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
