//! Port for paginated issue listing.

use futures::stream::BoxStream;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Issue, StateFilter};

/// Default number of issues requested per page.
pub const DEFAULT_PAGE_SIZE: u8 = 30;

/// Filter parameters for one issue listing.
///
/// Optional filters that are `None` (or an empty label list) are left out
/// of the remote request entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueQuery {
    pub state: StateFilter,
    /// Assignee login, `"*"` for any assignee or `"none"` for unassigned.
    pub assignee: Option<String>,
    /// Milestone number, `"*"` for any milestone or `"none"`.
    pub milestone: Option<String>,
    /// Only issues carrying all of these labels.
    pub labels: Vec<String>,
    pub per_page: u8,
}

impl Default for IssueQuery {
    fn default() -> Self {
        Self {
            state: StateFilter::Open,
            assignee: None,
            milestone: None,
            labels: Vec::new(),
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl IssueQuery {
    /// Render the query as ordered `(key, value)` parameters.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("state", self.state.to_string())];
        if let Some(assignee) = self.assignee.as_deref().filter(|s| !s.is_empty()) {
            params.push(("assignee", assignee.to_string()));
        }
        if let Some(milestone) = self.milestone.as_deref().filter(|s| !s.is_empty()) {
            params.push(("milestone", milestone.to_string()));
        }
        if !self.labels.is_empty() {
            params.push(("labels", self.labels.join(",")));
        }
        params.push(("per_page", self.per_page.to_string()));
        params
    }
}

/// A source of issues, served one page at a time.
///
/// Each call to [`pages`](IssueSource::pages) starts a fresh, forward-only
/// walk over the remote collection. The stream ends when the collection is
/// exhausted; an `Err` item means the listing failed and no further pages
/// can be fetched. Pages may contain pull requests.
pub trait IssueSource: Send + Sync {
    fn pages(&self, query: &IssueQuery) -> BoxStream<'_, DomainResult<Vec<Issue>>>;
}
