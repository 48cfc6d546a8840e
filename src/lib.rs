//! Release pipeline step that creates GitHub milestones named after
//! semantic versions.
//!
//! [`github::milestone::CreateMilestoneThroughApiCall`] is the entry point:
//! it sends one authenticated `POST` per call and reports created,
//! already-exists and unexpected responses as distinct results.

pub mod cli;
pub mod command;
pub mod error;
pub mod github;
pub mod value;

pub use cli::{Args, Command};
pub use error::{CreateMilestoneFailed, FailureReason, MilestoneError, Result};
pub use github::milestone::{CreateMilestone, CreateMilestoneThroughApiCall};
pub use value::{RepositoryName, SemVerVersion};

#[cfg(test)]
pub mod test_helpers;
