//! Creates one milestone for a version.
use log::*;

use crate::{
    Result,
    github::milestone::CreateMilestone,
    value::{RepositoryName, SemVerVersion},
};

/// Returns the new milestone's URL, or `None` when it already existed and
/// `ignore_existing` was set.
pub async fn execute(
    creator: &dyn CreateMilestone,
    repository: &RepositoryName,
    version: &SemVerVersion,
    ignore_existing: bool,
) -> Result<Option<String>> {
    info!("creating milestone {version} in {repository}");

    match creator.create_milestone(repository, version).await {
        Ok(url) => {
            info!("created milestone {version}: {url}");
            Ok(Some(url))
        }
        Err(err) if ignore_existing && err.is_already_exists() => {
            warn!("milestone {version} already exists in {repository}");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
