//! Per-issue actions.
//!
//! An [`IssueAction`] consumes one issue and produces exactly one
//! [`ActionOutcome`], possibly dispatching a workflow along the way. The
//! orchestrator only knows this trait, not any classification policy.

use async_trait::async_trait;

use crate::domain::models::{ActionOutcome, Issue, LabelAction, WorkflowInput};
use crate::services::dispatcher::WorkflowDispatcher;
use crate::services::label_classifier::{classify_product_label, ProductLabel};

/// Classify-then-maybe-dispatch step applied to each issue.
#[async_trait]
pub trait IssueAction: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    async fn apply(&self, issue: &Issue) -> ActionOutcome;
}

/// Forwards the issue's first product label as an `added` label event.
#[derive(Debug, Clone)]
pub struct ProductLabelSync {
    dispatcher: WorkflowDispatcher,
}

impl ProductLabelSync {
    pub const fn new(dispatcher: WorkflowDispatcher) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl IssueAction for ProductLabelSync {
    fn name(&self) -> &str {
        "product-label-sync"
    }

    async fn apply(&self, issue: &Issue) -> ActionOutcome {
        match classify_product_label(issue) {
            ProductLabel::Absent => ActionOutcome::Skipped,
            ProductLabel::Unnamed(label) => {
                tracing::warn!(
                    issue = issue.number,
                    url = %issue.url,
                    color = %label.color,
                    "Product label on {} has no name, not dispatching",
                    issue.url
                );
                ActionOutcome::Failed
            }
            ProductLabel::Named { name, label } => {
                let input =
                    WorkflowInput::label(name, Some(label.color.clone()), LabelAction::Added);
                self.dispatcher.dispatch(issue, &input).await
            }
        }
    }
}

/// Flags assigned issues as assignee updates.
#[derive(Debug, Clone)]
pub struct AssigneeSync {
    dispatcher: WorkflowDispatcher,
}

impl AssigneeSync {
    pub const fn new(dispatcher: WorkflowDispatcher) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl IssueAction for AssigneeSync {
    fn name(&self) -> &str {
        "assignee-sync"
    }

    async fn apply(&self, issue: &Issue) -> ActionOutcome {
        if !issue.has_assignees() {
            return ActionOutcome::Skipped;
        }
        self.dispatcher
            .dispatch(issue, &WorkflowInput::assignee_updated())
            .await
    }
}

/// Dispatches the same inputs for every issue.
///
/// Used when the listing is already filtered server-side (by label,
/// milestone, or state), so every issue that arrives qualifies.
#[derive(Debug, Clone)]
pub struct FixedInputDispatch {
    name: String,
    dispatcher: WorkflowDispatcher,
    input: WorkflowInput,
}

impl FixedInputDispatch {
    pub fn new(
        name: impl Into<String>,
        dispatcher: WorkflowDispatcher,
        input: WorkflowInput,
    ) -> Self {
        Self {
            name: name.into(),
            dispatcher,
            input,
        }
    }
}

#[async_trait]
impl IssueAction for FixedInputDispatch {
    fn name(&self) -> &str {
        &self.name
    }

    async fn apply(&self, issue: &Issue) -> ActionOutcome {
        self.dispatcher.dispatch(issue, &self.input).await
    }
}
