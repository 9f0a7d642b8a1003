//! Workflow dispatcher.
//!
//! Wraps the single external side effect of the relay. Failures are logged
//! and reported as [`ActionOutcome::Failed`]; they never propagate, so one
//! bad dispatch cannot abort a run.

use std::sync::Arc;

use crate::domain::models::{
    merge_inputs, ActionOutcome, InputFields, Issue, WorkflowInput, EVENT_TYPE_KEY,
    ISSUE_NUMBER_KEY,
};
use crate::domain::ports::WorkflowTrigger;

/// Default event tag sent with every dispatch.
pub const DEFAULT_EVENT_TYPE: &str = "issues";

/// Builds dispatch payloads for issues and submits them.
#[derive(Clone)]
pub struct WorkflowDispatcher {
    trigger: Arc<dyn WorkflowTrigger>,
    event_type: String,
}

impl WorkflowDispatcher {
    pub fn new(trigger: Arc<dyn WorkflowTrigger>, event_type: impl Into<String>) -> Self {
        Self {
            trigger,
            event_type: event_type.into(),
        }
    }

    /// Full payload for `issue`: the issue number and event tag, overlaid
    /// with `input`.
    pub fn payload(&self, issue: &Issue, input: &WorkflowInput) -> InputFields {
        let defaults = InputFields::from([
            (ISSUE_NUMBER_KEY.to_string(), issue.number.to_string()),
            (EVENT_TYPE_KEY.to_string(), self.event_type.clone()),
        ]);
        merge_inputs(defaults, input.to_fields())
    }

    /// Dispatch one event for `issue`. Calls the trigger exactly once.
    pub async fn dispatch(&self, issue: &Issue, input: &WorkflowInput) -> ActionOutcome {
        let payload = self.payload(issue, input);

        match self.trigger.trigger(&payload).await {
            Ok(()) => {
                tracing::info!(
                    issue = issue.number,
                    url = %issue.url,
                    "Triggered workflow for {}",
                    issue.url
                );
                ActionOutcome::Triggered
            }
            Err(err) => {
                tracing::error!(
                    issue = issue.number,
                    url = %issue.url,
                    error = %err,
                    "Failed to trigger workflow for {}: {err}",
                    issue.url
                );
                ActionOutcome::Failed
            }
        }
    }
}

impl std::fmt::Debug for WorkflowDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkflowDispatcher")
            .field("event_type", &self.event_type)
            .finish_non_exhaustive()
    }
}
