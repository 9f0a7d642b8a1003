//! GitHub implementation of [`IssueSource`].
//!
//! Walks `/repos/{owner}/{repo}/issues` by following the `Link: rel="next"`
//! header. Pull requests are passed through untouched; excluding them is
//! the orchestrator's job.

use std::sync::Arc;

use futures::stream::{self, BoxStream, StreamExt};

use crate::domain::errors::DomainResult;
use crate::domain::models::Issue;
use crate::domain::ports::{IssueQuery, IssueSource};

use super::client::GitHubClient;

/// Issue source backed by one GitHub repository.
#[derive(Debug, Clone)]
pub struct GitHubIssueSource {
    client: Arc<GitHubClient>,
    owner: String,
    repo: String,
}

impl GitHubIssueSource {
    pub fn new(
        client: Arc<GitHubClient>,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        Self {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl IssueSource for GitHubIssueSource {
    fn pages(&self, query: &IssueQuery) -> BoxStream<'_, DomainResult<Vec<Issue>>> {
        let first = match self.client.issues_url(&self.owner, &self.repo, query) {
            Ok(url) => url,
            Err(err) => return stream::once(async move { Err(err) }).boxed(),
        };

        tracing::debug!(
            owner = %self.owner,
            repo = %self.repo,
            url = %first,
            "Listing GitHub issues"
        );

        stream::try_unfold(Some(first), move |cursor| async move {
            let Some(url) = cursor else {
                return Ok(None);
            };
            let (issues, next) = self.client.list_issues_page(&url).await?;
            let page: Vec<Issue> = issues.into_iter().map(Issue::from).collect();
            Ok(Some((page, next)))
        })
        .boxed()
    }
}
