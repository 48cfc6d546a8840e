//! Maps create-milestone responses onto typed outcomes.
//!
//! The status code picks which body shape to try. The body then decides
//! the variant, so a `422` that is not a duplicate-title report falls
//! through to the generic failure.
use log::*;
use reqwest::StatusCode;

use crate::{
    error::CreateMilestoneFailed,
    github::types::{CreatedMilestone, ValidationFailed},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of a single create-milestone call.
pub enum MilestoneCreationOutcome {
    /// Web URL of the new milestone.
    Created(String),
    Failed(CreateMilestoneFailed),
}

impl MilestoneCreationOutcome {
    pub fn into_result(self) -> std::result::Result<String, CreateMilestoneFailed> {
        match self {
            MilestoneCreationOutcome::Created(url) => Ok(url),
            MilestoneCreationOutcome::Failed(failed) => Err(failed),
        }
    }
}

pub fn classify_response(
    status: StatusCode,
    body: &str,
) -> MilestoneCreationOutcome {
    match status {
        StatusCode::CREATED => classify_created(body),
        StatusCode::UNPROCESSABLE_ENTITY => classify_unprocessable(body),
        _ => MilestoneCreationOutcome::Failed(
            CreateMilestoneFailed::unexpected_status(status, body),
        ),
    }
}

fn classify_created(body: &str) -> MilestoneCreationOutcome {
    match serde_json::from_str::<CreatedMilestone>(body) {
        Ok(created) => MilestoneCreationOutcome::Created(created.html_url),
        Err(err) => {
            warn!("unable to read created milestone payload: {err}");
            MilestoneCreationOutcome::Failed(
                CreateMilestoneFailed::unexpected_success_payload(body),
            )
        }
    }
}

fn classify_unprocessable(body: &str) -> MilestoneCreationOutcome {
    let failed = match serde_json::from_str::<ValidationFailed>(body) {
        Ok(validation) if validation.is_already_exists() => {
            CreateMilestoneFailed::already_exists(body)
        }
        _ => CreateMilestoneFailed::unexpected_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            body,
        ),
    };

    MilestoneCreationOutcome::Failed(failed)
}
