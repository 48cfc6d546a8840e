use semver::Version;
use std::{fmt, str::FromStr};

use crate::{Result, error::MilestoneError};

/// Semantic version used as a milestone title.
///
/// Rendering a version parsed from canonical text yields that text again.
/// A single leading `v` is tolerated on input and dropped on output.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemVerVersion(Version);

impl SemVerVersion {
    /// Parses a milestone name such as `1.2.3`, `v1.2.3` or `2.0.0-rc.1`.
    pub fn from_milestone_name(name: &str) -> Result<Self> {
        let stripped = name.strip_prefix('v').unwrap_or(name);

        let version = Version::parse(stripped)
            .map_err(|err| MilestoneError::invalid_version(name, err))?;

        Ok(Self(version))
    }

    /// Milestone title for this version.
    pub fn render(&self) -> String {
        self.0.to_string()
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    pub fn patch(&self) -> u64 {
        self.0.patch
    }

    pub fn is_pre_release(&self) -> bool {
        !self.0.pre.is_empty()
    }

    /// `X.0.0`
    pub fn is_new_major_release(&self) -> bool {
        self.0.minor == 0 && self.0.patch == 0
    }

    /// `X.Y.0`
    pub fn is_new_minor_release(&self) -> bool {
        self.0.patch == 0
    }

    // The next_* helpers work on the numeric core only: pre-release and
    // build metadata never carry over to the following milestone.

    pub fn next_patch(&self) -> Self {
        Self(Version::new(self.0.major, self.0.minor, self.0.patch + 1))
    }

    pub fn next_minor(&self) -> Self {
        Self(Version::new(self.0.major, self.0.minor + 1, 0))
    }

    pub fn next_major(&self) -> Self {
        Self(Version::new(self.0.major + 1, 0, 0))
    }
}

impl fmt::Display for SemVerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SemVerVersion {
    type Err = MilestoneError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_milestone_name(s)
    }
}
