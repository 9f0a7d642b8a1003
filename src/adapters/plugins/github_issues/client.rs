//! GitHub HTTP client.
//!
//! Wraps the GitHub REST API v3, providing typed methods for the two
//! operations the relay needs: listing one page of issues and creating a
//! workflow-dispatch event. Pagination follows the `Link` response header.

use reqwest::header::{HeaderMap, LINK};
use reqwest::{Client, Method, RequestBuilder, Response, Url};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{GitHubConfig, InputFields};
use crate::domain::ports::IssueQuery;

use super::models::{GitHubIssue, GitHubWorkflowDispatchRequest};

/// Environment variable holding the GitHub token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// GitHub REST API version header value.
const GITHUB_API_VERSION: &str = "2022-11-28";

/// HTTP client for the GitHub REST API v3.
///
/// All methods return [`DomainResult`]; network failures map to
/// [`DomainError::Transport`] and non-success statuses to
/// [`DomainError::RemoteRejected`].
#[derive(Debug, Clone)]
pub struct GitHubClient {
    /// The underlying HTTP client.
    http: Client,
    /// GitHub personal access token or fine-grained token.
    token: String,
    /// API base URL without trailing slash.
    base_url: String,
}

impl GitHubClient {
    /// Create a new client with the given token and API settings.
    pub fn new(token: String, config: &GitHubConfig) -> DomainResult<Self> {
        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| DomainError::Transport {
                operation: "GitHub client setup",
                message: e.to_string(),
            })?;
        Ok(Self {
            http,
            token,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client by reading the `GITHUB_TOKEN` environment variable.
    ///
    /// Returns `Err` if the variable is not set or is empty.
    pub fn from_env(config: &GitHubConfig) -> DomainResult<Self> {
        let token = std::env::var(TOKEN_ENV_VAR).map_err(|_| {
            DomainError::ValidationFailed(format!(
                "{TOKEN_ENV_VAR} environment variable is not set"
            ))
        })?;
        if token.trim().is_empty() {
            return Err(DomainError::ValidationFailed(format!(
                "{TOKEN_ENV_VAR} environment variable is empty"
            )));
        }
        Self::new(token, config)
    }

    /// Build an authorized request.
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
    }

    /// URL of the first issue page for `query`.
    pub fn issues_url(&self, owner: &str, repo: &str, query: &IssueQuery) -> DomainResult<String> {
        let mut url = Url::parse(&format!("{}/repos/{owner}/{repo}/issues", self.base_url))
            .map_err(|e| {
                DomainError::ValidationFailed(format!("invalid GitHub issues URL: {e}"))
            })?;
        url.query_pairs_mut().extend_pairs(query.to_params());
        Ok(url.into())
    }

    /// Fetch one page of issues from `url`.
    ///
    /// Returns the decoded issues (pull requests included) and the URL of
    /// the next page, if any.
    pub async fn list_issues_page(
        &self,
        url: &str,
    ) -> DomainResult<(Vec<GitHubIssue>, Option<String>)> {
        tracing::debug!(url, "Fetching GitHub issue page");

        let resp = self
            .request(Method::GET, url)
            .send()
            .await
            .map_err(|e| DomainError::Transport {
                operation: "GitHub list_issues",
                message: e.to_string(),
            })?;
        let resp = Self::ensure_success("GitHub list_issues", resp).await?;

        let next = next_page_url(resp.headers());
        let issues = resp
            .json::<Vec<GitHubIssue>>()
            .await
            .map_err(|e| {
                DomainError::SerializationError(format!("GitHub list_issues parse failed: {e}"))
            })?;

        Ok((issues, next))
    }

    /// Create a workflow-dispatch event for `workflow` on `git_ref`.
    pub async fn dispatch_workflow(
        &self,
        owner: &str,
        repo: &str,
        workflow: &str,
        git_ref: &str,
        inputs: &InputFields,
    ) -> DomainResult<()> {
        let url = format!(
            "{}/repos/{owner}/{repo}/actions/workflows/{workflow}/dispatches",
            self.base_url
        );
        let body = GitHubWorkflowDispatchRequest {
            git_ref: git_ref.to_string(),
            inputs: inputs.clone(),
        };

        let resp = self
            .request(Method::POST, &url)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::Transport {
                operation: "GitHub workflow dispatch",
                message: e.to_string(),
            })?;
        Self::ensure_success("GitHub workflow dispatch", resp).await?;

        Ok(())
    }

    async fn ensure_success(operation: &'static str, resp: Response) -> DomainResult<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(DomainError::RemoteRejected {
            operation,
            status: status.as_u16(),
            body,
        })
    }
}

/// Extract the `rel="next"` target from a `Link` header.
fn next_page_url(headers: &HeaderMap) -> Option<String> {
    let link = headers.get(LINK)?.to_str().ok()?;
    parse_next_link(link)
}

/// Targets are delimited by `<...>` rather than by commas, since the
/// target URL may itself contain commas (e.g. `labels=bug,maps`).
fn parse_next_link(link: &str) -> Option<String> {
    let mut rest = link;
    while let Some(start) = rest.find('<') {
        let after_open = &rest[start + 1..];
        let end = after_open.find('>')?;
        let target = &after_open[..end];
        let params_and_more = &after_open[end + 1..];
        let params = params_and_more
            .find('<')
            .map_or(params_and_more, |next| &params_and_more[..next]);

        if params.split(';').any(is_rel_next) {
            return Some(target.to_string());
        }
        rest = &params_and_more[params.len()..];
    }
    None
}

fn is_rel_next(param: &str) -> bool {
    let Some((key, value)) = param.trim().trim_end_matches(',').split_once('=') else {
        return false;
    };
    key.trim().eq_ignore_ascii_case("rel")
        && value
            .trim()
            .trim_matches('"')
            .split_whitespace()
            .any(|rel| rel.eq_ignore_ascii_case("next"))
}
