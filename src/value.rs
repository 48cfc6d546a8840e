//! Validated domain values used to address and title milestones.

/// Repository identifiers in `owner/name` form.
pub mod repository;

/// Semantic versions used as milestone titles.
pub mod version;

pub use repository::RepositoryName;
pub use version::SemVerVersion;
