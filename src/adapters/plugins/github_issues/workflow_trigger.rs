//! GitHub Actions implementation of [`WorkflowTrigger`].

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::InputFields;
use crate::domain::ports::WorkflowTrigger;

use super::client::GitHubClient;

/// Dispatches one fixed workflow on one fixed ref.
#[derive(Debug, Clone)]
pub struct GitHubWorkflowTrigger {
    client: Arc<GitHubClient>,
    owner: String,
    repo: String,
    /// Workflow file name or numeric id.
    workflow: String,
    git_ref: String,
}

impl GitHubWorkflowTrigger {
    pub fn new(
        client: Arc<GitHubClient>,
        owner: impl Into<String>,
        repo: impl Into<String>,
        workflow: impl Into<String>,
        git_ref: impl Into<String>,
    ) -> Self {
        Self {
            client,
            owner: owner.into(),
            repo: repo.into(),
            workflow: workflow.into(),
            git_ref: git_ref.into(),
        }
    }
}

#[async_trait]
impl WorkflowTrigger for GitHubWorkflowTrigger {
    async fn trigger(&self, inputs: &InputFields) -> DomainResult<()> {
        tracing::debug!(
            owner = %self.owner,
            repo = %self.repo,
            workflow = %self.workflow,
            git_ref = %self.git_ref,
            inputs = ?inputs,
            "Dispatching GitHub workflow"
        );
        self.client
            .dispatch_workflow(&self.owner, &self.repo, &self.workflow, &self.git_ref, inputs)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use crate::domain::models::GitHubConfig;
    use mockito::{Matcher, Server};

    fn trigger_for(server: &Server) -> GitHubWorkflowTrigger {
        let config = GitHubConfig {
            api_base_url: server.url(),
            ..GitHubConfig::default()
        };
        let client = Arc::new(GitHubClient::new("token".to_string(), &config).unwrap());
        GitHubWorkflowTrigger::new(client, "org", "tracker", "project-sync.yml", "release")
    }

    #[tokio::test]
    async fn test_trigger_targets_configured_workflow_and_ref() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock(
                "POST",
                "/repos/org/tracker/actions/workflows/project-sync.yml/dispatches",
            )
            .match_body(Matcher::PartialJson(serde_json::json!({
                "ref": "release",
                "inputs": { "assignee_updated": "true" }
            })))
            .with_status(204)
            .create_async()
            .await;

        let inputs = InputFields::from([("assignee_updated".to_string(), "true".to_string())]);
        trigger_for(&server).trigger(&inputs).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_trigger_returns_error_on_rejection() {
        let mut server = Server::new_async().await;
        server
            .mock(
                "POST",
                "/repos/org/tracker/actions/workflows/project-sync.yml/dispatches",
            )
            .with_status(404)
            .with_body("Not Found")
            .create_async()
            .await;

        let err = trigger_for(&server)
            .trigger(&InputFields::new())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::RemoteRejected { status: 404, .. }));
    }
}
