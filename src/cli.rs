//! CLI argument parsing and credential resolution.
use clap::{Parser, Subcommand};
use secrecy::SecretString;
use std::env;

use crate::{
    Result,
    error::MilestoneError,
    github::config::{ApiToken, DEFAULT_TIMEOUT_SECS},
    value::{RepositoryName, SemVerVersion},
};

/// Environment variable holding the repository in GitHub Actions.
pub const REPOSITORY_ENV_VAR: &str = "GITHUB_REPOSITORY";
/// Environment variable consulted when no token flag is given.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Creates release milestones on GitHub.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = "", global = true)]
    /// Repository in owner/name form. Falls back to GITHUB_REPOSITORY env var.
    pub repository: String,

    #[arg(long, default_value = "", global = true)]
    /// GitHub personal access token. Falls back to GITHUB_TOKEN env var.
    pub github_token: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    /// Seconds to wait for the API before giving up.
    pub timeout: u64,

    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Milestone subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a milestone titled with the given version.
    Create {
        /// Semantic version used as milestone title.
        version: String,

        #[arg(long, default_value_t = false)]
        /// Succeed when a milestone with this title already exists.
        ignore_existing: bool,
    },

    /// Create milestones for the next patch, minor and major versions
    /// following a release.
    CreateNext {
        /// Version that was just released.
        version: String,
    },
}

impl Command {
    pub fn version(&self) -> Result<SemVerVersion> {
        match self {
            Command::Create { version, .. } | Command::CreateNext { version } => {
                SemVerVersion::from_milestone_name(version)
            }
        }
    }
}

impl Args {
    pub fn get_repository(&self) -> Result<RepositoryName> {
        resolve_repository(&self.repository, env::var(REPOSITORY_ENV_VAR).ok())
    }

    pub fn get_api_token(&self) -> Result<ApiToken> {
        resolve_token(&self.github_token, env::var(TOKEN_ENV_VAR).ok())
    }
}

/// Flag value first, then the environment.
fn resolve_repository(
    arg: &str,
    env_value: Option<String>,
) -> Result<RepositoryName> {
    let mut repository = arg.to_string();

    if repository.is_empty()
        && let Some(value) = env_value
    {
        repository = value;
    }

    if repository.is_empty() {
        return Err(MilestoneError::RepositoryNotConfigured);
    }

    RepositoryName::from_full_name(&repository)
}

fn resolve_token(arg: &str, env_value: Option<String>) -> Result<ApiToken> {
    let mut token = arg.to_string();

    if token.is_empty()
        && let Some(value) = env_value
    {
        token = value;
    }

    ApiToken::new(SecretString::from(token))
}
