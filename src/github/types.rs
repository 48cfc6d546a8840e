use serde::{Deserialize, Serialize};

/// Error code GitHub reports for a duplicate milestone title.
pub const ALREADY_EXISTS_CODE: &str = "already_exists";

#[derive(Debug, Serialize)]
pub struct CreateMilestone {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct CreatedMilestone {
    pub html_url: String,
}

#[derive(Debug, Deserialize)]
pub struct ValidationFailed {
    pub errors: Vec<ValidationErrorEntry>,
}

/// One item of a validation failure's `errors` array. GitHub mixes
/// objects and bare strings here, and objects do not always carry a code.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ValidationErrorEntry {
    Coded {
        #[serde(default)]
        code: Option<String>,
    },
    Other(serde_json::Value),
}

impl ValidationErrorEntry {
    pub fn code(&self) -> Option<&str> {
        match self {
            ValidationErrorEntry::Coded { code } => code.as_deref(),
            ValidationErrorEntry::Other(_) => None,
        }
    }
}

impl ValidationFailed {
    pub fn is_already_exists(&self) -> bool {
        self.errors
            .iter()
            .any(|e| e.code() == Some(ALREADY_EXISTS_CODE))
    }
}
