//! GitHub REST API response and request models.
//!
//! These structs map to the GitHub REST API v3 JSON payloads.
//! They are used internally by the GitHub adapters and are converted to
//! domain types before leaving this module tree.

use serde::{Deserialize, Serialize};

use crate::domain::models::{InputFields, Issue, IssueState, Label};

/// An issue returned by the GitHub API.
///
/// Note: issues and pull requests share the same endpoint. Pull requests
/// include a non-null `pull_request` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubIssue {
    /// Sequential number within the repository (e.g., 42 → "#42").
    pub number: u64,
    /// Current state: "open" or "closed".
    pub state: String,
    /// URL to view the issue in the GitHub UI.
    pub html_url: String,
    /// Labels applied to the issue.
    #[serde(default)]
    pub labels: Vec<GitHubLabel>,
    /// Users assigned to the issue.
    #[serde(default)]
    pub assignees: Vec<GitHubUser>,
    /// Present when this item is actually a pull request, not an issue.
    #[serde(default)]
    pub pull_request: Option<GitHubPullRequestRef>,
}

/// A label applied to a GitHub issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubLabel {
    /// The label name; can come back null on malformed labels.
    #[serde(default)]
    pub name: Option<String>,
    /// Hex colour without the leading `#`.
    #[serde(default)]
    pub color: String,
}

/// A GitHub user reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
}

/// Reference object present on pull requests (absent on plain issues).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubPullRequestRef {
    /// API URL of the pull request resource.
    #[serde(default)]
    pub url: Option<String>,
}

/// Request body for `POST .../actions/workflows/{id}/dispatches`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubWorkflowDispatchRequest {
    /// Branch or tag the workflow runs on.
    #[serde(rename = "ref")]
    pub git_ref: String,
    /// Workflow inputs; values are always strings.
    pub inputs: InputFields,
}

impl From<GitHubLabel> for Label {
    fn from(label: GitHubLabel) -> Self {
        Self {
            name: label.name,
            color: label.color,
        }
    }
}

impl From<GitHubIssue> for Issue {
    fn from(issue: GitHubIssue) -> Self {
        let state = if issue.state.eq_ignore_ascii_case("closed") {
            IssueState::Closed
        } else {
            IssueState::Open
        };
        Self {
            number: issue.number,
            url: issue.html_url,
            state,
            labels: issue.labels.into_iter().map(Label::from).collect(),
            assignees: issue.assignees.into_iter().map(|u| u.login).collect(),
            is_pull_request: issue.pull_request.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_issue_deserialization() {
        let json = r#"{
            "id": 1,
            "number": 42,
            "title": "Map tiles missing",
            "state": "open",
            "labels": [
                { "name": "bug", "color": "d73a4a" },
                { "name": "maps", "color": "006B75" }
            ],
            "assignees": [ { "login": "octocat", "id": 1 } ],
            "pull_request": null,
            "html_url": "https://github.com/org/repo/issues/42"
        }"#;
        let issue: Issue = serde_json::from_str::<GitHubIssue>(json).unwrap().into();
        assert_eq!(issue.number, 42);
        assert_eq!(issue.state, IssueState::Open);
        assert_eq!(issue.labels.len(), 2);
        assert_eq!(issue.labels[1].usable_name(), Some("maps"));
        assert_eq!(issue.assignees, vec!["octocat".to_string()]);
        assert!(!issue.is_pull_request);
    }

    #[test]
    fn test_minimal_issue_deserialization() {
        let json = r#"{
            "number": 1,
            "state": "closed",
            "html_url": "https://github.com/org/repo/issues/1"
        }"#;
        let issue: Issue = serde_json::from_str::<GitHubIssue>(json).unwrap().into();
        assert_eq!(issue.state, IssueState::Closed);
        assert!(issue.labels.is_empty());
        assert!(issue.assignees.is_empty());
        assert!(!issue.is_pull_request);
    }

    #[test]
    fn test_pr_detection_via_pull_request_field() {
        let json = r#"{
            "number": 99,
            "state": "open",
            "pull_request": { "url": "https://api.github.com/repos/org/repo/pulls/99" },
            "html_url": "https://github.com/org/repo/pull/99"
        }"#;
        let issue: Issue = serde_json::from_str::<GitHubIssue>(json).unwrap().into();
        assert!(issue.is_pull_request);
    }

    #[test]
    fn test_label_with_null_name() {
        let json = r#"{ "name": null, "color": "006B75" }"#;
        let label: Label = serde_json::from_str::<GitHubLabel>(json).unwrap().into();
        assert_eq!(label.name, None);
        assert_eq!(label.usable_name(), None);
    }

    #[test]
    fn test_dispatch_request_serializes_ref_key() {
        let req = GitHubWorkflowDispatchRequest {
            git_ref: "main".to_string(),
            inputs: InputFields::from([("issue_number".to_string(), "7".to_string())]),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["ref"], "main");
        assert_eq!(value["inputs"]["issue_number"], "7");
        assert!(value.get("git_ref").is_none());
    }
}
