//! Opens milestones for the versions that may follow a release.
use log::*;

use crate::{
    Result,
    github::milestone::CreateMilestone,
    value::{RepositoryName, SemVerVersion},
};

/// Next patch, next minor and next major, in that order.
pub fn next_versions(released: &SemVerVersion) -> Vec<SemVerVersion> {
    vec![
        released.next_patch(),
        released.next_minor(),
        released.next_major(),
    ]
}

/// Creates a milestone for each of [`next_versions`]. Duplicates are
/// skipped; any other failure stops the run. Returns the URLs of the
/// milestones that were created.
pub async fn execute(
    creator: &dyn CreateMilestone,
    repository: &RepositoryName,
    released: &SemVerVersion,
) -> Result<Vec<String>> {
    let mut created = vec![];

    for version in next_versions(released) {
        debug!("creating follow-up milestone {version} in {repository}");

        match creator.create_milestone(repository, &version).await {
            Ok(url) => {
                info!("created milestone {version}: {url}");
                created.push(url);
            }
            Err(err) if err.is_already_exists() => {
                warn!("milestone {version} already exists, skipping");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(created)
}
