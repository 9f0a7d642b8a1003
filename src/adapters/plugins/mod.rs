//! Native adapter plugins.
//!
//! Each sub-module corresponds to an external system and implements the
//! domain port traits directly.

pub mod github_issues;

use std::sync::Arc;

use crate::domain::errors::DomainResult;
use crate::domain::models::Config;
use crate::domain::ports::{IssueSource, WorkflowTrigger};

use self::github_issues::{GitHubClient, GitHubIssueSource, GitHubWorkflowTrigger};

/// Port instances wired to one external system.
pub struct NativePorts {
    pub issues: Arc<dyn IssueSource>,
    pub trigger: Arc<dyn WorkflowTrigger>,
}

/// Create the GitHub-backed ports described by `config`.
///
/// The token is read from `GITHUB_TOKEN`.
///
/// # Errors
///
/// Returns `Err` if the token is missing or empty, or the HTTP client
/// cannot be built.
pub fn create_github_ports(config: &Config) -> DomainResult<NativePorts> {
    let client = Arc::new(GitHubClient::from_env(&config.github)?);
    Ok(github_ports(client, config))
}

/// Wire the ports around an existing client.
pub fn github_ports(client: Arc<GitHubClient>, config: &Config) -> NativePorts {
    let issues = GitHubIssueSource::new(
        Arc::clone(&client),
        &config.repository.owner,
        &config.repository.repo,
    );
    let trigger = GitHubWorkflowTrigger::new(
        client,
        &config.repository.owner,
        &config.repository.repo,
        &config.dispatch.workflow,
        &config.dispatch.git_ref,
    );
    NativePorts {
        issues: Arc::new(issues),
        trigger: Arc::new(trigger),
    }
}
