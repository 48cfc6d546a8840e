//! Commands run by the CLI against a milestone creator.

/// Create a single milestone.
pub mod create;

/// Create the milestones following a release.
pub mod create_next;
