//! Iteration orchestrator.
//!
//! Walks an [`IssueSource`] page by page, drops pull requests, applies an
//! [`IssueAction`] to every remaining issue and tallies the outcomes.
//! Everything runs strictly in sequence: one page at a time, one issue at a
//! time, with a fixed pause between pages as the only rate limiting.

use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;

use crate::domain::errors::DomainResult;
use crate::domain::models::{RunCounters, StateFilter};
use crate::domain::ports::{IssueQuery, IssueSource, DEFAULT_PAGE_SIZE};
use crate::services::actions::IssueAction;
use crate::services::pr_filter::exclude_pull_requests;

/// Parameters for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterateOptions {
    pub state: StateFilter,
    pub assignee: Option<String>,
    pub milestone: Option<String>,
    pub labels: Vec<String>,
    pub page_size: u8,
    /// Pause after every processed page.
    pub inter_page_delay: Duration,
    /// Process only the first page, then stop without pausing.
    pub stop_after_first_page: bool,
}

impl Default for IterateOptions {
    fn default() -> Self {
        Self {
            state: StateFilter::Open,
            assignee: None,
            milestone: None,
            labels: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
            inter_page_delay: Duration::ZERO,
            stop_after_first_page: false,
        }
    }
}

impl IterateOptions {
    /// Remote filter parameters for this run.
    pub fn to_query(&self) -> IssueQuery {
        IssueQuery {
            state: self.state,
            assignee: self.assignee.clone(),
            milestone: self.milestone.clone(),
            labels: self.labels.clone(),
            per_page: self.page_size,
        }
    }
}

/// Drives a full scan of the issue source for one action.
#[derive(Clone)]
pub struct IterationOrchestrator {
    source: Arc<dyn IssueSource>,
}

impl IterationOrchestrator {
    pub fn new(source: Arc<dyn IssueSource>) -> Self {
        Self { source }
    }

    /// Run `action` over every issue the source yields for `options`.
    ///
    /// Issue-level failures are counted, never returned. A failure to fetch
    /// a page ends the run with that error.
    pub async fn iterate(
        &self,
        action: &dyn IssueAction,
        options: &IterateOptions,
    ) -> DomainResult<RunCounters> {
        let mut counters = RunCounters::new();
        let query = options.to_query();

        tracing::info!(
            action = action.name(),
            state = %query.state,
            assignee = ?query.assignee,
            milestone = ?query.milestone,
            labels = ?query.labels,
            per_page = query.per_page,
            "Starting issue iteration"
        );

        let mut pages = self.source.pages(&query);
        let mut page_number: u64 = 0;

        while let Some(page) = pages.next().await {
            let page = page.inspect_err(|err| {
                tracing::error!(page = page_number + 1, error = %err, "Failed to fetch issue page");
            })?;
            page_number += 1;

            let fetched = page.len();
            let issues = exclude_pull_requests(page);
            tracing::debug!(
                page = page_number,
                fetched,
                issues = issues.len(),
                "Processing issue page"
            );

            for issue in &issues {
                let outcome = action.apply(issue).await;
                tracing::debug!(issue = issue.number, outcome = %outcome, "Issue processed");
                counters.record(outcome);
            }

            if options.stop_after_first_page {
                tracing::info!(page = page_number, "Stopping after first page");
                break;
            }

            let delay_ms = u64::try_from(options.inter_page_delay.as_millis()).unwrap_or(u64::MAX);
            tracing::info!(
                page = page_number,
                delay_ms,
                "Waiting {delay_ms}ms before fetching the next page"
            );
            tokio::time::sleep(options.inter_page_delay).await;
        }

        tracing::info!(
            action = action.name(),
            pages = page_number,
            total = counters.total(),
            triggered = counters.triggered(),
            skipped = counters.skipped(),
            failed = counters.failed(),
            "Issue iteration complete"
        );

        Ok(counters)
    }
}
