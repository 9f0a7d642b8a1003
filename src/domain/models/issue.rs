//! Issue domain model.
//!
//! Read-only snapshots of tracker issues, held only for the duration of a
//! single run.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle state of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

impl IssueState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State filter used when listing issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateFilter {
    #[default]
    Open,
    Closed,
    All,
}

impl StateFilter {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::All => "all",
        }
    }
}

impl fmt::Display for StateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StateFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            "all" => Ok(Self::All),
            other => Err(format!(
                "invalid issue state '{other}': expected open, closed, or all"
            )),
        }
    }
}

/// A named, coloured tag on an issue.
///
/// `name` is optional because the tracker can hand back labels without a
/// usable name; classification treats that as an anomaly rather than a
/// decode failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: Option<String>,
    /// Hex colour without the leading `#`.
    pub color: String,
}

impl Label {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            color: color.into(),
        }
    }

    /// Returns the label name when it is present and non-blank.
    pub fn usable_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.trim().is_empty())
    }
}

/// An issue (or pull request) as returned by the issue listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Sequential number within the repository.
    pub number: u64,
    /// URL to view the issue in the tracker UI.
    pub url: String,
    pub state: IssueState,
    pub labels: Vec<Label>,
    /// Logins of the assigned users, possibly empty.
    pub assignees: Vec<String>,
    /// Set when the listing entry is actually a pull request.
    pub is_pull_request: bool,
}

impl Issue {
    /// Create an open, unlabelled, unassigned issue.
    pub fn new(number: u64, url: impl Into<String>) -> Self {
        Self {
            number,
            url: url.into(),
            state: IssueState::Open,
            labels: Vec::new(),
            assignees: Vec::new(),
            is_pull_request: false,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    #[must_use]
    pub fn with_assignee(mut self, login: impl Into<String>) -> Self {
        self.assignees.push(login.into());
        self
    }

    #[must_use]
    pub const fn with_state(mut self, state: IssueState) -> Self {
        self.state = state;
        self
    }

    #[must_use]
    pub const fn as_pull_request(mut self) -> Self {
        self.is_pull_request = true;
        self
    }

    pub fn has_assignees(&self) -> bool {
        !self.assignees.is_empty()
    }
}
