//! In-memory port implementations for service tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{InputFields, Issue};
use crate::domain::ports::{IssueQuery, IssueSource, WorkflowTrigger};

/// Trigger that records every payload and either always succeeds or
/// always fails.
#[derive(Debug, Default)]
pub struct RecordingTrigger {
    fail: bool,
    calls: Mutex<Vec<InputFields>>,
}

impl RecordingTrigger {
    pub fn succeeding() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: Mutex::default(),
        }
    }

    pub fn calls(&self) -> Vec<InputFields> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WorkflowTrigger for RecordingTrigger {
    async fn trigger(&self, inputs: &InputFields) -> DomainResult<()> {
        self.calls.lock().unwrap().push(inputs.clone());
        if self.fail {
            Err(DomainError::RemoteRejected {
                operation: "GitHub workflow dispatch",
                status: 500,
                body: "boom".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

/// Issue source serving fixed pages, optionally failing at one page index.
#[derive(Debug, Default)]
pub struct StaticIssueSource {
    pages: Vec<Vec<Issue>>,
    fail_at: Option<usize>,
    pages_served: Arc<AtomicUsize>,
    queries: Mutex<Vec<IssueQuery>>,
}

impl StaticIssueSource {
    pub fn new(pages: Vec<Vec<Issue>>) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn failing_at(mut self, index: usize) -> Self {
        self.fail_at = Some(index);
        self
    }

    /// Number of page requests the consumer actually pulled.
    pub fn pages_served(&self) -> usize {
        self.pages_served.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<IssueQuery> {
        self.queries.lock().unwrap().clone()
    }
}

impl IssueSource for StaticIssueSource {
    fn pages(&self, query: &IssueQuery) -> BoxStream<'_, DomainResult<Vec<Issue>>> {
        self.queries.lock().unwrap().push(query.clone());
        let served = Arc::clone(&self.pages_served);
        let fail_at = self.fail_at;
        let total = self.pages.len() + usize::from(fail_at.is_some());

        stream::iter(0..total)
            .map(move |index| {
                served.fetch_add(1, Ordering::SeqCst);
                if Some(index) == fail_at {
                    Err(DomainError::Transport {
                        operation: "GitHub list_issues",
                        message: "connection reset".to_string(),
                    })
                } else {
                    let page_index = match fail_at {
                        Some(f) if index > f => index - 1,
                        _ => index,
                    };
                    Ok(self.pages[page_index].clone())
                }
            })
            .boxed()
    }
}
