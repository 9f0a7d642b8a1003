//! Service layer: classification, dispatch, and the iteration pipeline.

pub mod actions;
pub mod dispatcher;
pub mod label_classifier;
pub mod orchestrator;
pub mod pr_filter;

#[cfg(test)]
pub(crate) mod test_support;

pub use actions::{AssigneeSync, FixedInputDispatch, IssueAction, ProductLabelSync};
pub use dispatcher::{WorkflowDispatcher, DEFAULT_EVENT_TYPE};
pub use label_classifier::{
    classify_product_label, product_labels_of, ProductLabel, PRODUCT_LABEL_COLOR,
};
pub use orchestrator::{IterateOptions, IterationOrchestrator};
pub use pr_filter::exclude_pull_requests;
