use std::{fmt, str::FromStr};

use crate::{Result, error::MilestoneError};

/// GitHub repository identifier split into owner and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryName {
    owner: String,
    name: String,
}

impl RepositoryName {
    /// Parses `owner/name`. Both halves must be non-empty and contain no
    /// further slashes.
    pub fn from_full_name(full_name: &str) -> Result<Self> {
        let invalid =
            || MilestoneError::InvalidRepositoryName(full_name.to_string());

        let (owner, name) = full_name.split_once('/').ok_or_else(invalid)?;

        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepositoryName {
    type Err = MilestoneError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_full_name(s)
    }
}
